#[cfg(feature = "tracing")]
use tracing::error;

use super::{CategoryTable, PriceQuote, PricingError, UserCategory};
use crate::catalog::CatalogItem;
use crate::money::Amount;

/// Apply a percentage discount with truncation toward zero.
///
/// `base - floor(base * percent / 100)`. Truncation is the canonical rounding:
/// 451 at 40% is 271, never 270.
pub fn apply_discount(base: Amount, discount_percent: u8) -> Amount {
    let base = base.units();
    let percent = u128::from(discount_percent.min(100));
    // u128 keeps base * percent exact for every u64 base.
    let reduction = (u128::from(base) * percent / 100) as u64;
    Amount::new(base - reduction)
}

/// Side-effect-free discounted pricing over a static category table.
#[derive(Debug, Clone, Default)]
pub struct PricingCalculator {
    table: CategoryTable,
}

impl PricingCalculator {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Price after the category discount.
    ///
    /// Never exceeds `base_price`; equals it exactly when the discount is 0.
    pub fn discounted_price(
        &self,
        base_price: Amount,
        category: UserCategory,
    ) -> Result<Amount, PricingError> {
        let percent = self.table.discount_percent(category).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            error!(error = %_err, %category, "category missing from pricing table");
        })?;
        Ok(apply_discount(base_price, percent))
    }

    /// Original and discounted price for one item, plus the category benefits.
    pub fn quote(
        &self,
        item: &CatalogItem,
        category: UserCategory,
    ) -> Result<PriceQuote, PricingError> {
        let profile = self.table.profile(category)?;
        let discounted = apply_discount(item.base_price, profile.discount_percent());
        Ok(PriceQuote {
            item_id: item.id,
            category,
            original: item.base_price,
            original_label: item.price_label.clone(),
            discounted,
            discount_percent: profile.discount_percent(),
            benefits: profile.benefits().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::ids::ItemId;

    fn calculator() -> PricingCalculator {
        PricingCalculator::new(CategoryTable::standard())
    }

    #[test]
    fn test_child_discount_on_even_amount_is_exact() {
        let price = calculator()
            .discounted_price(Amount::new(2500), UserCategory::Child)
            .unwrap();
        assert_eq!(price, Amount::new(1250));
    }

    #[test]
    fn test_senior_discount_truncates_on_odd_amount() {
        let price = calculator()
            .discounted_price(Amount::new(451), UserCategory::Senior)
            .unwrap();
        assert_eq!(price, Amount::new(271));
    }

    #[test]
    fn test_adult_pays_base_price() {
        let price = calculator()
            .discounted_price(Amount::new(451), UserCategory::Adult)
            .unwrap();
        assert_eq!(price, Amount::new(451));
    }

    #[test]
    fn test_zero_base_price_stays_zero() {
        let calc = calculator();
        for category in UserCategory::ALL {
            assert_eq!(
                calc.discounted_price(Amount::ZERO, category).unwrap(),
                Amount::ZERO
            );
        }
    }

    #[test]
    fn test_discount_never_exceeds_base_and_only_zero_discount_keeps_it() {
        let calc = calculator();
        for base in (1..=2_000u64).step_by(7) {
            for category in UserCategory::ALL {
                let discounted = calc.discounted_price(Amount::new(base), category).unwrap();
                let percent = calc.table().discount_percent(category).unwrap();
                assert!(discounted.units() <= base);
                // floor(base * p / 100) can be 0 for tiny bases, so equality
                // implies zero discount only once the reduction is at least one unit.
                if base * u64::from(percent) >= 100 {
                    assert_eq!(discounted.units() == base, percent == 0);
                }
            }
        }
    }

    #[test]
    fn test_full_discount_is_free() {
        assert_eq!(apply_discount(Amount::new(999), 100), Amount::ZERO);
    }

    #[test]
    fn test_huge_base_does_not_overflow() {
        let price = apply_discount(Amount::new(u64::MAX), 50);
        assert_eq!(price.units(), u64::MAX - u64::MAX / 2);
    }

    #[test]
    fn test_missing_profile_fails_with_unknown_category() {
        let mut entries = crate::config::defaults::categories();
        entries.remove("senior");
        let calc = PricingCalculator::new(CategoryTable::from_config(&entries).unwrap());

        let err = calc
            .discounted_price(Amount::new(100), UserCategory::Senior)
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::UnknownCategory {
                name: "senior".to_string()
            }
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_quote_carries_original_label_and_benefits() {
        let config = EngineConfig::default();
        let catalog = crate::catalog::Catalog::from_config(&config.catalog).unwrap();
        let hotel = catalog.get(ItemId::new(1)).unwrap();

        let quote = calculator().quote(hotel, UserCategory::Student).unwrap();
        assert_eq!(quote.original, Amount::new(2500));
        assert_eq!(quote.discounted, Amount::new(1750));
        assert_eq!(quote.original_label, "₹2,500/night");
        assert!(quote.show_original());
        assert_eq!(quote.benefits, ["Educational tours", "Group discounts"]);

        let adult = calculator().quote(hotel, UserCategory::Adult).unwrap();
        assert!(!adult.show_original());
        assert_eq!(adult.savings(), Amount::ZERO);
    }
}
