//! # kt-core
//!
//! Core domain models and business logic for Kerala Transit.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! category pricing, the reward-coupon ledger and the onboarding flow.

// Public module exports
pub mod catalog;
pub mod config;
pub mod ids;
pub mod money;
pub mod onboarding;
pub mod ports;
pub mod pricing;
pub mod rewards;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, CatalogItem, ItemKind};
pub use config::{ConfigError, EngineConfig};
pub use ids::{CouponId, ItemId};
pub use money::Amount;
pub use onboarding::{Advance, OnboardingFlow, OnboardingState};
pub use pricing::{CategoryProfile, CategoryTable, PriceQuote, PricingCalculator, UserCategory};
pub use rewards::{ClaimError, ClaimReceipt, Coupon, CouponBook, CouponStatus, RewardAccount, RewardLedger};
