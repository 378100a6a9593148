//! Money

use rust_decimal::Decimal;
use rusty_money::{Money, define_currency_set};

define_currency_set!(
    shop {
        RS: {
            code: "RS",
            exponent: 2,
            locale: EnUs,
            minor_units: 100,
            name: "Rupee",
            symbol: "Rs",
            symbol_first: true,
        }
    }
);

/// A monetary amount in the fixed shop currency.
///
/// Notifications and reports render amounts through this type so every line
/// carries the `Rs` prefix and two decimal places (`Rs5.00`, never `Rs5`).
pub type Amount = Money<'static, shop::Currency>;

/// Wraps a raw decimal value in the fixed shop currency.
#[must_use]
pub fn amount(value: Decimal) -> Amount {
    Money::from_decimal(value, shop::RS)
}
