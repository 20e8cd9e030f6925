//! Catalog - product records and the index that enumerates them.
//!
//! The key-value port cannot scan keys, so every product id the catalog
//! knows about is kept in a JSON array under [`INDEX_KEY`]. Products live
//! under `product-<id>`.
//!
//! ## Example
//!
//! ```ignore
//! use stock_catalog::{CatalogConfig, CatalogRepository, InMemoryKeyValueStore};
//! use stock_catalog::catalog::{seed_catalog, starter_products};
//!
//! let repo = CatalogRepository::new(InMemoryKeyValueStore::new(), CatalogConfig::default());
//! seed_catalog(&repo, &starter_products())?;
//! let all = repo.list_all()?;
//! let tv = repo.get(1)?;
//! ```

mod index;
mod repository;
mod seed;
mod starter;

pub use index::CatalogIndex;
pub use repository::CatalogRepository;
pub use seed::{seed_catalog, SeedReport};
pub use starter::starter_products;

/// Key holding the JSON array of known product ids.
pub const INDEX_KEY: &str = "productIDs";

/// Prefix of every product key.
pub const PRODUCT_KEY_PREFIX: &str = "product-";

/// Default name of the state store component.
pub const DEFAULT_STATE_STORE: &str = "statestore";

/// Deterministic key for a product id.
pub fn product_key(id: i64) -> String {
    format!("{}{}", PRODUCT_KEY_PREFIX, id)
}

/// Settings shared by the repository, index and processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Name of the state store every key is read from and written to.
    pub state_store_name: String,
}

impl CatalogConfig {
    pub fn new(state_store_name: impl Into<String>) -> Self {
        Self {
            state_store_name: state_store_name.into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_STORE)
    }
}
