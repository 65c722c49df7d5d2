//! Decimal type utilities for monetary amounts

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Monetary amount carried by an operation or a computed balance
pub type Amount = Decimal;

/// Convert a raw JSON float into an [`Amount`], keeping the full mantissa
pub fn amount_from_f64(value: f64) -> Option<Amount> {
    Decimal::from_f64_retain(value)
}
