//! Integration tests for the sell state machine over a full inventory.
//!
//! Each test pins "now" with a fixed clock and captures notifications in a
//! memory sink, so outcomes, stock movements, and emitted lines can all be
//! asserted together.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use testresult::TestResult;

use stockbook::{fixtures, prelude::*};

/// A moment at which Amoxicillin (expiry 2023-11-30) is expired and the
/// other fixture products are not.
fn fixed_clock() -> FixedClock {
    FixedClock::new(
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
            .single()
            .expect("valid timestamp"),
    )
}

fn pharmacy() -> TestResult<Inventory<FixedClock, MemorySink>> {
    let mut inventory = Inventory::with_collaborators(fixed_clock(), MemorySink::new());

    for product in fixtures::pharmacy_products()? {
        inventory.add_product(product);
    }

    Ok(inventory)
}

fn stock_of(inventory: &Inventory<FixedClock, MemorySink>, name: &str) -> Option<i64> {
    inventory
        .products()
        .find(|product| product.name() == name)
        .map(Product::stock)
}

#[test]
fn sequential_sales_decrement_stock_per_sale() -> TestResult {
    let mut inventory = pharmacy()?;

    let first = inventory.sell_product("Aspirin", 10);

    assert_eq!(
        first,
        SellOutcome::Sold {
            quantity: 10,
            amount: Decimal::new(500, 2),
        }
    );
    assert_eq!(stock_of(&inventory, "Aspirin"), Some(90));

    let second = inventory.sell_product("Aspirin", 30);

    assert_eq!(
        second,
        SellOutcome::Sold {
            quantity: 30,
            amount: Decimal::new(1500, 2),
        }
    );
    assert_eq!(stock_of(&inventory, "Aspirin"), Some(60));

    Ok(())
}

#[test]
fn stock_never_goes_negative_across_a_sale_sequence() -> TestResult {
    let mut inventory = pharmacy()?;

    // 100 units of Aspirin: 3 x 40 cannot all succeed.
    for _ in 0..3 {
        let _outcome = inventory.sell_product("Aspirin", 40);

        let stock = stock_of(&inventory, "Aspirin").expect("Aspirin is stocked");
        assert!(stock >= 0, "stock must never go negative, got {stock}");
    }

    assert_eq!(stock_of(&inventory, "Aspirin"), Some(20));
    assert_eq!(inventory.sales().len(), 2);

    Ok(())
}

#[test]
fn overselling_reports_available_stock_and_leaves_no_trace() -> TestResult {
    let mut inventory = pharmacy()?;

    let outcome = inventory.sell_product("Tylenol", 999);

    assert_eq!(outcome, SellOutcome::InsufficientStock { available: 50 });
    assert_eq!(stock_of(&inventory, "Tylenol"), Some(50));
    assert!(inventory.sales().is_empty());
    assert!(inventory.daily_sales().is_empty());
    assert_eq!(
        inventory.sink().lines().last().map(String::as_str),
        Some("Insufficient stock for Tylenol. Available stock: 50")
    );

    Ok(())
}

#[test]
fn expired_products_cannot_be_sold_regardless_of_stock() -> TestResult {
    let mut inventory = pharmacy()?;

    let within_stock = inventory.sell_product("Amoxicillin", 2);
    let beyond_stock = inventory.sell_product("Amoxicillin", 999);

    assert_eq!(within_stock, SellOutcome::Expired);
    assert_eq!(beyond_stock, SellOutcome::Expired);
    assert_eq!(stock_of(&inventory, "Amoxicillin"), Some(30));
    assert!(inventory.sales().is_empty());
    assert!(inventory.daily_sales().is_empty());

    Ok(())
}

#[test]
fn unknown_names_yield_not_found_for_sell_and_remove() -> TestResult {
    let mut inventory = pharmacy()?;

    assert_eq!(inventory.sell_product("Ibuprofen", 1), SellOutcome::NotFound);
    assert_eq!(
        inventory.remove_product("Ibuprofen"),
        RemoveOutcome::NotFound
    );
    assert_eq!(inventory.len(), 3);

    Ok(())
}

#[test]
fn add_then_remove_round_trips_the_product_sequence() -> TestResult {
    let mut inventory = pharmacy()?;

    let before: Vec<String> = inventory.products().map(|p| p.name().to_string()).collect();

    inventory.add_product(Product::new(
        "Vitamin C",
        Decimal::new(25, 2),
        200,
        50,
        "2026-01-01",
    )?);
    assert_eq!(inventory.remove_product("Vitamin C"), RemoveOutcome::Removed);

    let after: Vec<String> = inventory.products().map(|p| p.name().to_string()).collect();

    assert_eq!(before, after);
    assert_eq!(inventory.sell_product("Vitamin C", 1), SellOutcome::NotFound);

    Ok(())
}

#[test]
fn each_sale_records_matching_entries_in_both_logs() -> TestResult {
    let mut inventory = pharmacy()?;
    let now = fixed_clock().now();

    assert!(
        matches!(inventory.sell_product("Aspirin", 10), SellOutcome::Sold { .. }),
        "expected the sale to succeed"
    );
    assert!(
        matches!(inventory.sell_product("Tylenol", 5), SellOutcome::Sold { .. }),
        "expected the sale to succeed"
    );

    let sales = inventory.sales();
    let daily = inventory.daily_sales();

    assert_eq!(sales.len(), 2);
    assert_eq!(daily.len(), 2);

    for (sale, daily_sale) in sales.iter().zip(daily) {
        assert_eq!(sale.amount(), daily_sale.amount());
        assert_eq!(sale.sold_at(), now);
        assert_eq!(daily_sale.sold_at(), now);
    }

    Ok(())
}
