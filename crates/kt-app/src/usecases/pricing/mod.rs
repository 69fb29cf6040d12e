mod quote_catalog;

pub use quote_catalog::{QuoteCatalog, QuoteError};
