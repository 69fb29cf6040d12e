//! Catalog domain models
//!
//! Listed items (lodging and transit services) that the pricing calculator
//! quotes. Items are immutable once listed.

mod item;

pub use item::{Catalog, CatalogError, CatalogItem, ItemKind};
