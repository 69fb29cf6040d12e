use std::sync::Arc;

use tracing::{debug, error};

use kt_core::catalog::Catalog;
use kt_core::ids::ItemId;
use kt_core::pricing::{PriceQuote, PricingCalculator, PricingError, UserCategory};

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("catalog item {id} not found")]
    ItemNotFound { id: ItemId },
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Use case for pricing catalog items for a rider category.
pub struct QuoteCatalog {
    calculator: Arc<PricingCalculator>,
    catalog: Arc<Catalog>,
}

impl QuoteCatalog {
    pub fn new(calculator: Arc<PricingCalculator>, catalog: Arc<Catalog>) -> Self {
        Self {
            calculator,
            catalog,
        }
    }

    /// Quote every listed item, in catalog order.
    pub fn execute(&self, category: UserCategory) -> Result<Vec<PriceQuote>, QuoteError> {
        let quotes = self
            .catalog
            .iter()
            .map(|item| self.calculator.quote(item, category))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| error!(error = %err, %category, "catalog quote failed"))?;
        debug!(%category, count = quotes.len(), "catalog quoted");
        Ok(quotes)
    }

    pub fn quote_item(
        &self,
        id: ItemId,
        category: UserCategory,
    ) -> Result<PriceQuote, QuoteError> {
        let item = self.catalog.get(id).ok_or(QuoteError::ItemNotFound { id })?;
        self.calculator
            .quote(item, category)
            .inspect_err(|err| error!(error = %err, item_id = %id, "item quote failed"))
            .map_err(QuoteError::from)
    }

    /// Parse a category name coming from the presentation layer, then quote.
    pub fn execute_for(&self, category: &str) -> Result<Vec<PriceQuote>, QuoteError> {
        let category = category
            .parse::<UserCategory>()
            .inspect_err(|err| error!(error = %err, "unknown category from caller"))?;
        self.execute(category)
    }
}
