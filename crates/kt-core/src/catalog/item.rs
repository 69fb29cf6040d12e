use serde::{Deserialize, Serialize};

use crate::config::CatalogItemConfig;
use crate::ids::ItemId;
use crate::money::{Amount, AmountParseError};

/// What a catalog item sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A night's stay (hotels, guest houses).
    Lodging,
    /// A seat on a scheduled service (buses, trains).
    Transit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog item {id} is listed more than once")]
    DuplicateItem { id: ItemId },

    #[error("catalog item {id} has an invalid price: {source}")]
    InvalidPrice {
        id: ItemId,
        #[source]
        source: AmountParseError,
    },
}

/// A listed item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub name: String,
    /// Location for lodging, route for transit.
    pub place: String,
    pub base_price: Amount,
    /// Price as originally listed, shown struck through next to a discount.
    pub price_label: String,
    pub rating: Option<f32>,
    pub amenities: Vec<String>,
    pub departure: Option<String>,
    /// Marketing tier such as "Premium" or "Express".
    pub category_label: String,
}

impl CatalogItem {
    pub fn from_config(config: &CatalogItemConfig) -> Result<Self, CatalogError> {
        let id = ItemId::new(config.id);
        let base_price = Amount::parse_label(&config.price)
            .map_err(|source| CatalogError::InvalidPrice { id, source })?;
        let place = match config.kind {
            ItemKind::Lodging => config.location.clone(),
            ItemKind::Transit => config.route.clone(),
        }
        .or_else(|| config.location.clone())
        .or_else(|| config.route.clone())
        .unwrap_or_default();

        Ok(Self {
            id,
            kind: config.kind,
            name: config.name.clone(),
            place,
            base_price,
            price_label: config.price.clone(),
            rating: config.rating,
            amenities: config.amenities.clone(),
            departure: config.departure.clone(),
            category_label: config.category.clone(),
        })
    }
}

/// Ordered, id-unique collection of listed items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        for (pos, item) in items.iter().enumerate() {
            if items[..pos].iter().any(|other| other.id == item.id) {
                return Err(CatalogError::DuplicateItem { id: item.id });
            }
        }
        Ok(Self { items })
    }

    pub fn from_config(configs: &[CatalogItemConfig]) -> Result<Self, CatalogError> {
        let items = configs
            .iter()
            .map(CatalogItem::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_standard_catalog_parses_price_labels() {
        let config = EngineConfig::default();
        let catalog = Catalog::from_config(&config.catalog).unwrap();

        let hotel = catalog.get(ItemId::new(1)).unwrap();
        assert_eq!(hotel.kind, ItemKind::Lodging);
        assert_eq!(hotel.base_price, Amount::new(2500));
        assert_eq!(hotel.place, "Chankyapuri");
        assert_eq!(hotel.amenities.len(), 3);

        let bus = catalog.get(ItemId::new(3)).unwrap();
        assert_eq!(bus.kind, ItemKind::Transit);
        assert_eq!(bus.base_price, Amount::new(450));
        assert_eq!(bus.place, "Delhi - Agra");
        assert_eq!(bus.departure.as_deref(), Some("06:30 AM"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let config = EngineConfig::default();
        let mut items = config.catalog.clone();
        items.push(items[0].clone());

        let err = Catalog::from_config(&items).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateItem { id: ItemId::new(1) });
    }

    #[test]
    fn test_unparseable_price_names_the_item() {
        let mut item = EngineConfig::default().catalog[1].clone();
        item.price = "on request".to_string();

        let err = CatalogItem::from_config(&item).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { id, .. } if id == ItemId::new(3)));
    }
}
