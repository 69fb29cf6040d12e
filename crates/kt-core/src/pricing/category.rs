use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PricingError;
use crate::config::CategoryProfileConfig;

/// Rider classification that determines the discount applied to a price.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UserCategory {
    Child,
    Student,
    #[default]
    Adult,
    Senior,
}

impl UserCategory {
    pub const ALL: [UserCategory; 4] = [
        UserCategory::Child,
        UserCategory::Student,
        UserCategory::Adult,
        UserCategory::Senior,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserCategory::Child => "child",
            UserCategory::Student => "student",
            UserCategory::Adult => "adult",
            UserCategory::Senior => "senior",
        }
    }
}

impl Display for UserCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserCategory {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PricingError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Discount and benefits granted to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProfile {
    discount_percent: u8,
    benefits: Vec<String>,
}

impl CategoryProfile {
    pub fn new(
        category: UserCategory,
        discount_percent: u32,
        benefits: Vec<String>,
    ) -> Result<Self, PricingError> {
        let discount_percent = u8::try_from(discount_percent)
            .ok()
            .filter(|percent| *percent <= 100)
            .ok_or_else(|| PricingError::DiscountOutOfRange {
                category: category.to_string(),
                percent: discount_percent,
            })?;
        Ok(Self {
            discount_percent,
            benefits,
        })
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Benefit descriptions in display order.
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }
}

/// Static category → profile mapping. Not mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    profiles: BTreeMap<UserCategory, CategoryProfile>,
}

impl CategoryTable {
    pub fn new(profiles: BTreeMap<UserCategory, CategoryProfile>) -> Self {
        Self { profiles }
    }

    /// The stock rider table: child 50%, student 30%, adult 0%, senior 40%.
    pub fn standard() -> Self {
        Self::from_config(&crate::config::defaults::categories())
            .unwrap_or_else(|_| unreachable!("built-in category table is valid"))
    }

    /// Build from config entries keyed by category name.
    ///
    /// Unknown names fail with [`PricingError::UnknownCategory`]. A table may
    /// omit categories; looking one of those up fails the same way.
    pub fn from_config(
        entries: &BTreeMap<String, CategoryProfileConfig>,
    ) -> Result<Self, PricingError> {
        let mut profiles = BTreeMap::new();
        for (name, entry) in entries {
            let category: UserCategory = name.parse()?;
            let profile = CategoryProfile::new(category, entry.discount, entry.benefits.clone())?;
            profiles.insert(category, profile);
        }
        Ok(Self { profiles })
    }

    pub fn profile(&self, category: UserCategory) -> Result<&CategoryProfile, PricingError> {
        self.profiles
            .get(&category)
            .ok_or_else(|| PricingError::UnknownCategory {
                name: category.to_string(),
            })
    }

    pub fn discount_percent(&self, category: UserCategory) -> Result<u8, PricingError> {
        self.profile(category).map(CategoryProfile::discount_percent)
    }

    pub fn categories(&self) -> impl Iterator<Item = UserCategory> + '_ {
        self.profiles.keys().copied()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}
