//! Products

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::{Amount, amount};

/// Textual format expected for expiry dates.
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur when constructing a product.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The expiry date string did not match `YYYY-MM-DD`.
    #[error("invalid expiry date {value:?}: {source}")]
    ExpiryDate {
        /// The rejected input string
        value: String,

        /// The underlying parse error
        source: chrono::ParseError,
    },
}

/// A mutable record for one stocked item.
///
/// Products are constructed standalone and handed to an inventory, which
/// becomes their sole owner. Stock mutates only through [`Product::update_stock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Decimal,
    stock: i64,
    min_stock: i64,
    expiry_date: NaiveDate,
}

impl Product {
    /// Creates a new product, parsing the expiry date from `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the expiry date string does not match the
    /// expected format. This is the only fatal construction condition.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        stock: i64,
        min_stock: i64,
        expiry_date: &str,
    ) -> Result<Self, FormatError> {
        let expiry = NaiveDate::parse_from_str(expiry_date, EXPIRY_DATE_FORMAT).map_err(
            |source| FormatError::ExpiryDate {
                value: expiry_date.to_string(),
                source,
            },
        )?;

        Ok(Self::with_expiry(name, price, stock, min_stock, expiry))
    }

    /// Creates a new product from an already-parsed expiry date.
    #[must_use]
    pub fn with_expiry(
        name: impl Into<String>,
        price: Decimal,
        stock: i64,
        min_stock: i64,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            min_stock,
            expiry_date,
        }
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price as a raw decimal.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the unit price in the shop currency.
    #[must_use]
    pub fn unit_price(&self) -> Amount {
        amount(self.price)
    }

    /// Returns the current stock level.
    #[must_use]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Returns the reorder threshold.
    #[must_use]
    pub fn min_stock(&self) -> i64 {
        self.min_stock
    }

    /// Returns the expiry date.
    #[must_use]
    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Whether stock has reached the reorder threshold.
    #[must_use]
    pub fn is_below_threshold(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Whether the product is expired at the given moment.
    ///
    /// The comparison is strictly "after" midnight (UTC) at the start of the
    /// expiry date: at that exact instant the product is not yet expired.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry_moment()
    }

    /// Applies a signed stock adjustment.
    ///
    /// No bounds check happens at this layer; validating sale quantities
    /// against available stock is the owning inventory's responsibility.
    pub fn update_stock(&mut self, delta: i64) {
        self.stock += delta;
    }

    fn expiry_moment(&self) -> DateTime<Utc> {
        self.expiry_date.and_time(NaiveTime::MIN).and_utc()
    }
}
