//! Pharmacy Demo
//!
//! Replays a small pharmacy session: stock three products, record a handful
//! of sales (including one against an expired product), print both reports,
//! and render the stock chart.
//!
//! Use `-c` to load a product catalog YAML file instead of the built-in fixture
//! Use `-o` to write the stock chart to a file instead of stdout

use std::{
    fs::File,
    io::{self, Write},
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockbook::{
    catalog::Catalog,
    chart::{ChartRenderer, TextBarChart},
    fixtures,
    inventory::Inventory,
    utils::DemoArgs,
};

/// Pharmacy demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = DemoArgs::parse();
    let start = Instant::now();

    let products = match args.catalog.as_deref() {
        Some(path) => Catalog::from_path(path)?.into_products()?,
        None => fixtures::pharmacy_products()?,
    };

    let mut inventory = Inventory::new();

    for product in products {
        inventory.add_product(product);
    }

    let sales = [
        ("Aspirin", 10),
        ("Tylenol", 5),
        ("Aspirin", 30),
        ("Amoxicillin", 2),
    ];

    for (name, quantity) in sales {
        let outcome = inventory.sell_product(name, quantity);
        info!(name, quantity, ?outcome, "sale attempted");
    }

    println!();
    inventory.generate_sales_report();
    println!();
    inventory.generate_daily_sales_report();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle)?;
    inventory.sales_report().write_table(&mut handle)?;

    let snapshot = inventory.stock_snapshot();
    let chart = TextBarChart::default();

    if let Some(path) = args.out.as_deref() {
        let mut file = File::create(path)?;
        chart.render(&snapshot, &mut file)?;
    } else {
        writeln!(handle)?;
        chart.render(&snapshot, &mut handle)?;
    }

    println!(
        "\nProgram runtime: {}",
        start.elapsed().human(Truncate::Millis)
    );

    Ok(())
}
