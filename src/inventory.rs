//! Inventory

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    money::amount,
    notify::{ConsoleSink, NotificationSink},
    products::Product,
    records::{DailySaleRecord, SaleRecord},
    report::{DailySalesReport, SalesReport},
};

new_key_type! {
    /// Stocked product key
    pub struct StockedProductKey;
}

/// Outcome of a sell attempt.
///
/// Exactly one variant is produced per call, and the operation is
/// all-or-nothing: either [`SellOutcome::Sold`] with stock and both sale logs
/// updated together, or no state change at all.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SellOutcome {
    /// Sale succeeded; stock was decremented and both logs appended.
    Sold {
        /// Units sold
        quantity: u32,

        /// Computed sale amount (quantity times unit price)
        amount: Decimal,
    },

    /// No product with the requested name.
    NotFound,

    /// The product is past its expiry date.
    Expired,

    /// The requested quantity exceeds the available stock.
    InsufficientStock {
        /// Stock available at the time of the attempt
        available: i64,
    },
}

/// Outcome of removing a product by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RemoveOutcome {
    /// The first product with the requested name was removed.
    Removed,

    /// No product with the requested name.
    NotFound,
}

/// One entry of the ordered stock snapshot handed to chart renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    /// Product name
    pub name: String,

    /// Current stock level
    pub stock: i64,
}

/// Aggregate owning the product catalog and the two append-only sale logs.
///
/// Products iterate in add order. Name lookups match the first product added
/// with that name; duplicate names are deliberately not rejected, so two
/// products can share one (see `DESIGN.md`), and `sell_product` /
/// `remove_product` only ever touch the first match.
///
/// The inventory is single-owner, single-threaded state. Callers exposing it
/// across threads must wrap every operation in external synchronization; the
/// scan-then-mutate sequences here are not atomic.
#[derive(Debug)]
pub struct Inventory<C = SystemClock, S = ConsoleSink> {
    products: SlotMap<StockedProductKey, Product>,
    order: Vec<StockedProductKey>,
    by_name: FxHashMap<String, SmallVec<[StockedProductKey; 1]>>,
    sales: Vec<SaleRecord>,
    daily_sales: Vec<DailySaleRecord>,
    clock: C,
    sink: S,
}

impl Inventory {
    /// Creates an empty inventory using the system clock and console sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_collaborators(SystemClock, ConsoleSink)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, S: NotificationSink> Inventory<C, S> {
    /// Creates an empty inventory with the given clock and notification sink.
    pub fn with_collaborators(clock: C, sink: S) -> Self {
        Self {
            products: SlotMap::with_key(),
            order: Vec::new(),
            by_name: FxHashMap::default(),
            sales: Vec::new(),
            daily_sales: Vec::new(),
            clock,
            sink,
        }
    }

    /// Appends a product and emits the confirmation notification.
    ///
    /// No duplicate-name check is performed; adding always succeeds.
    pub fn add_product(&mut self, product: Product) -> StockedProductKey {
        let line = format!(
            "Product {} added to inventory with expiry date {}.",
            product.name(),
            product.expiry_date(),
        );
        let name = product.name().to_string();

        let key = self.products.insert(product);
        self.order.push(key);
        self.by_name.entry(name.clone()).or_default().push(key);

        debug!(product = %name, "product added");
        self.sink.notify(&line);

        key
    }

    /// Removes the first product with the given name.
    ///
    /// Removing an absent name is safe; it reports not-found and changes
    /// nothing.
    pub fn remove_product(&mut self, name: &str) -> RemoveOutcome {
        let Some(key) = self.first_key(name) else {
            self.sink
                .notify(&format!("Product {name} not found in inventory."));
            return RemoveOutcome::NotFound;
        };

        self.products.remove(key);
        self.order.retain(|&k| k != key);

        if let Some(keys) = self.by_name.get_mut(name) {
            keys.retain(|k| *k != key);

            if keys.is_empty() {
                self.by_name.remove(name);
            }
        }

        debug!(product = %name, "product removed");
        self.sink
            .notify(&format!("Product {name} removed from inventory."));

        RemoveOutcome::Removed
    }

    /// Sells `quantity` units of the first product with the given name.
    ///
    /// The four outcomes of [`SellOutcome`] are the only possible results;
    /// none of the rejection outcomes mutates any state. A zero quantity
    /// passes the stock check and records a zero-amount sale, matching the
    /// historical behavior of this system (see `DESIGN.md`).
    pub fn sell_product(&mut self, name: &str, quantity: u32) -> SellOutcome {
        let now = self.clock.now();

        let Some(product) = self.first_key(name).and_then(|key| self.products.get_mut(key))
        else {
            self.sink
                .notify(&format!("Product {name} not found in inventory."));
            return SellOutcome::NotFound;
        };

        if product.is_expired(now) {
            debug!(product = %name, "sale rejected: expired");
            self.sink
                .notify(&format!("Product {name} has expired and cannot be sold."));
            return SellOutcome::Expired;
        }

        let available = product.stock();

        if available < i64::from(quantity) {
            debug!(product = %name, quantity, available, "sale rejected: insufficient stock");
            self.sink.notify(&format!(
                "Insufficient stock for {name}. Available stock: {available}"
            ));
            return SellOutcome::InsufficientStock { available };
        }

        product.update_stock(-i64::from(quantity));
        let sale_amount = product.price() * Decimal::from(quantity);

        self.sales
            .push(SaleRecord::new(name, quantity, sale_amount, now));
        self.daily_sales.push(DailySaleRecord::new(now, sale_amount));

        debug!(product = %name, quantity, %sale_amount, "sale recorded");
        self.sink.notify(&format!(
            "Sold {quantity} units of {name}. Sale amount: {}",
            amount(sale_amount),
        ));

        SellOutcome::Sold {
            quantity,
            amount: sale_amount,
        }
    }

    /// Iterates over the products in add order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.order.iter().filter_map(|&key| self.products.get(key))
    }

    /// Returns a product by key.
    #[must_use]
    pub fn get(&self, key: StockedProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Number of stocked products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the inventory holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The full sale log, in sale order.
    #[must_use]
    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    /// The daily sale log, in sale order.
    #[must_use]
    pub fn daily_sales(&self) -> &[DailySaleRecord] {
        &self.daily_sales
    }

    /// Derives the sales report from the full sale log.
    #[must_use]
    pub fn sales_report(&self) -> SalesReport<'_> {
        SalesReport::new(&self.sales)
    }

    /// Derives the daily sales report from the daily log.
    #[must_use]
    pub fn daily_sales_report(&self) -> DailySalesReport<'_> {
        DailySalesReport::new(&self.daily_sales)
    }

    /// Renders the sales report through the notification sink.
    pub fn generate_sales_report(&mut self) {
        let lines = self.sales_report().to_lines();

        for line in &lines {
            self.sink.notify(line);
        }
    }

    /// Renders the daily sales report through the notification sink.
    pub fn generate_daily_sales_report(&mut self) {
        let lines = self.daily_sales_report().to_lines();

        for line in &lines {
            self.sink.notify(line);
        }
    }

    /// Ordered `(name, stock)` snapshot for chart renderers.
    #[must_use]
    pub fn stock_snapshot(&self) -> Vec<StockLevel> {
        self.products()
            .map(|product| StockLevel {
                name: product.name().to_string(),
                stock: product.stock(),
            })
            .collect()
    }

    /// The notification sink, for callers that need to inspect it.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn first_key(&self, name: &str) -> Option<StockedProductKey> {
        self.by_name
            .get(name)
            .and_then(|keys| keys.first().copied())
    }
}
