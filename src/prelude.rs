//! Stockbook prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError, CatalogProduct},
    chart::{ChartRenderer, TextBarChart},
    clock::{Clock, FixedClock, SystemClock},
    inventory::{Inventory, RemoveOutcome, SellOutcome, StockLevel, StockedProductKey},
    money::{Amount, amount},
    notify::{ConsoleSink, MemorySink, NotificationSink},
    products::{FormatError, Product},
    records::{DailySaleRecord, SaleRecord},
    report::{DailySalesReport, SalesReport},
};
