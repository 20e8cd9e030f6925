//! CatalogRepository - get/put/list over the key-value port.

use tracing::{debug, warn};

use super::{product_key, CatalogConfig, CatalogIndex};
use crate::codec;
use crate::error::CatalogError;
use crate::product::Product;
use crate::store::{KeyValueStore, Metadata};

/// Sole reader and writer of product records and the product index.
///
/// Generic over the key-value port; pass `&S` or `Arc<S>` to share a store.
pub struct CatalogRepository<S> {
    store: S,
    config: CatalogConfig,
}

impl<S: KeyValueStore> CatalogRepository<S> {
    pub fn new(store: S, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The product-id index in this repository's state store.
    pub fn index(&self) -> CatalogIndex<'_, S> {
        CatalogIndex::new(&self.store, &self.config.state_store_name)
    }

    /// Load one product. Absent or nil values are `NotFound`.
    pub fn get(&self, id: i64) -> Result<Product, CatalogError> {
        debug!(product_id = id, "retrieving product");
        let bytes = match self
            .store
            .get(&self.config.state_store_name, &product_key(id))?
        {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                debug!(product_id = id, "state store returned nil");
                return Err(CatalogError::NotFound { id });
            }
        };

        codec::decode(&bytes).map_err(|source| CatalogError::Decode {
            id: Some(id),
            source,
        })
    }

    /// Store a product under `product-<id>`.
    ///
    /// The index is left untouched: products stored here after seeding do
    /// not show up in [`list_all`](Self::list_all).
    pub fn put(&self, id: i64, product: &Product) -> Result<(), CatalogError> {
        debug!(product_id = id, "saving product");
        let bytes = codec::encode(product)?;
        self.store.put(
            &self.config.state_store_name,
            &product_key(id),
            bytes,
            &Metadata::new(),
        )?;
        Ok(())
    }

    /// All indexed products in index order.
    ///
    /// Products that fail to load are logged and skipped. Only an unreadable
    /// index fails the call.
    pub fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        let ids = self.index().list()?;
        let mut products = Vec::with_capacity(ids.len());

        for id in ids {
            match self.get(id) {
                Ok(product) => products.push(product),
                Err(error) => {
                    warn!(product_id = id, error = %error, "skipping product in listing");
                }
            }
        }

        Ok(products)
    }
}
