use serde::Serialize;

use super::UserCategory;
use crate::ids::ItemId;
use crate::money::Amount;

/// Result of pricing one catalog item for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub item_id: ItemId,
    pub category: UserCategory,
    pub original: Amount,
    pub original_label: String,
    pub discounted: Amount,
    pub discount_percent: u8,
    pub benefits: Vec<String>,
}

impl PriceQuote {
    /// Whether the struck-through original price should be shown.
    pub fn show_original(&self) -> bool {
        self.discount_percent > 0
    }

    /// Zero when `discounted` is not below `original`.
    pub fn savings(&self) -> Amount {
        Amount::new(self.original.units().saturating_sub(self.discounted.units()))
    }
}
