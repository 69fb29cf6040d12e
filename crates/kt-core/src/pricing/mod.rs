//! Pricing domain module.
//!
//! Category discounts are a static table keyed by a closed enumeration; the
//! calculator applies them to listed prices with truncating integer math.

mod calculator;
mod category;
mod error;
mod quote;

pub use calculator::{apply_discount, PricingCalculator};
pub use category::{CategoryProfile, CategoryTable, UserCategory};
pub use error::PricingError;
pub use quote::PriceQuote;
