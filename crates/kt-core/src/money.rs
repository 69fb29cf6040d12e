//! Integer currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Symbol used when an amount is displayed without an explicit currency.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// A non-negative price in the smallest unit the catalog is quoted in.
///
/// Prices are never fractional: discounts truncate toward zero, so every
/// computed amount stays an exact integer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("price label {label:?} contains no digits")]
    NoDigits { label: String },

    #[error("price label {label:?} does not fit in an amount")]
    Overflow { label: String },
}

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(self) -> u64 {
        self.0
    }

    /// Parse a display label such as `"₹2,500/night"` into an amount.
    ///
    /// Every character that is not an ASCII digit is dropped, so grouping
    /// separators, currency symbols and unit suffixes are ignored.
    pub fn parse_label(label: &str) -> Result<Self, AmountParseError> {
        let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(AmountParseError::NoDigits {
                label: label.to_string(),
            });
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| AmountParseError::Overflow {
                label: label.to_string(),
            })
    }

    /// Render with an explicit currency symbol, e.g. `"₹1250"`.
    pub fn display_with(self, symbol: &str) -> String {
        format!("{symbol}{}", self.0)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{DEFAULT_CURRENCY_SYMBOL}{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}
