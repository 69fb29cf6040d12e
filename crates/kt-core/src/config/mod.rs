//! Static configuration DTOs.
//!
//! These structs map the TOML document one-to-one and carry no rules of their
//! own. Domain values are built from them with the `from_config` constructors,
//! which is where validation happens.

pub(crate) mod defaults;
mod engine_config;
mod error;

pub use engine_config::{
    AccountConfig, CatalogItemConfig, CategoryProfileConfig, CouponConfig, EngineConfig,
    OnboardingConfig, StorageConfig,
};
pub use error::ConfigError;
