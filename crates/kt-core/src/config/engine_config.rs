use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::catalog::ItemKind;
use crate::money::DEFAULT_CURRENCY_SYMBOL;
use crate::onboarding::OnboardingPage;

/// Whole static configuration.
///
/// Sections missing from the document fall back to the built-in seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub currency_symbol: String,

    /// Keyed by lowercase category name (`child`, `student`, `adult`, `senior`).
    pub categories: BTreeMap<String, CategoryProfileConfig>,

    pub catalog: Vec<CatalogItemConfig>,

    pub coupons: Vec<CouponConfig>,

    /// Starting account snapshot.
    pub account: AccountConfig,

    pub onboarding: OnboardingConfig,

    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProfileConfig {
    /// Percentage, 0-100.
    pub discount: u32,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemConfig {
    pub id: u32,
    pub kind: ItemKind,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    /// Listed price label, e.g. `"₹2,500/night"`.
    pub price: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub departure: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponConfig {
    pub id: u32,
    pub title: String,
    pub calories: u64,
    pub expires: String,
    pub points: u64,
    #[serde(default)]
    pub claimed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub points: u64,
    pub calories: u64,
    pub claimed: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    pub consent_prompt: String,
    pub pages: Vec<OnboardingPage>,
}

/// Where mutable state is kept. In memory when `data_dir` is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            categories: defaults::categories(),
            catalog: defaults::catalog(),
            coupons: defaults::coupons(),
            account: defaults::account(),
            onboarding: defaults::onboarding(),
            storage: StorageConfig::default(),
        }
    }
}
