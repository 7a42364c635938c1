//! Type-safe price representation using decimal arithmetic.
//!
//! Menu prices are plain non-negative amounts in the shop's currency. Every
//! shop in the catalog prices in Philippine pesos, so display formatting
//! always uses the peso sign.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency symbol used when rendering prices.
pub const CURRENCY_SYMBOL: &str = "₱";

/// Errors that can occur when constructing a price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price must not be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative menu price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of centavos.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_cents(12000).to_string(), "₱120.00");
        assert_eq!(Price::new(Decimal::new(255, 1)).unwrap().to_string(), "₱25.50");
        assert_eq!(Price::ZERO.to_string(), "₱0.00");
    }

    #[test]
    fn test_negative_rejected() {
        let err = Price::new(Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(err, PriceError::Negative(Decimal::new(-1, 2)));
    }

    #[test]
    fn test_negative_zero_accepted() {
        let mut zero = Decimal::ZERO;
        zero.set_sign_negative(true);
        assert!(Price::new(zero).is_ok());
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Price::from_cents(2500), Price::new(Decimal::new(25, 0)).unwrap());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Price = serde_json::from_str("\"80.00\"").unwrap();
        assert_eq!(ok, Price::from_cents(8000));
        assert!(serde_json::from_str::<Price>("\"-3\"").is_err());
    }
}
