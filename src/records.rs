//! Sale records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Textual format used when rendering sale timestamps.
pub const SALE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Immutable log entry for one successful sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    product: String,
    quantity: u32,
    amount: Decimal,
    sold_at: DateTime<Utc>,
}

impl SaleRecord {
    pub(crate) fn new(
        product: impl Into<String>,
        quantity: u32,
        amount: Decimal,
        sold_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product: product.into(),
            quantity,
            amount,
            sold_at,
        }
    }

    /// Name of the product sold.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Units sold in this transaction.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Computed sale amount (quantity times unit price).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Moment the sale was recorded.
    #[must_use]
    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }
}

/// Immutable log entry capturing only the time and amount of a sale.
///
/// The daily log is a coarser view of the same transactions; it carries no
/// product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySaleRecord {
    sold_at: DateTime<Utc>,
    amount: Decimal,
}

impl DailySaleRecord {
    pub(crate) fn new(sold_at: DateTime<Utc>, amount: Decimal) -> Self {
        Self { sold_at, amount }
    }

    /// Moment the sale was recorded.
    #[must_use]
    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }

    /// Computed sale amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
