//! CatalogIndex - the ordered list of product ids under `productIDs`.

use tracing::{debug, info};

use super::INDEX_KEY;
use crate::codec::DecodeError;
use crate::error::CatalogError;
use crate::store::{KeyValueStore, Metadata};

/// Typed accessor for the product-id index of one state store.
pub struct CatalogIndex<'a, S> {
    store: &'a S,
    store_name: &'a str,
}

impl<'a, S: KeyValueStore> CatalogIndex<'a, S> {
    pub fn new(store: &'a S, store_name: &'a str) -> Self {
        Self { store, store_name }
    }

    /// Read the index. A missing (or nil) index key is an empty catalog;
    /// an unreadable one is an error.
    pub fn list(&self) -> Result<Vec<i64>, CatalogError> {
        let bytes = match self.store.get(self.store_name, INDEX_KEY)? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                debug!("no product index in state store");
                return Ok(Vec::new());
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode {
            id: None,
            source: DecodeError {
                direct: format!("product index: {}", e),
                wrapped: "not attempted".into(),
            },
        })
    }

    /// Merge `new_ids` into the index and persist it in one write.
    ///
    /// Ids already present are not repeated; new ones keep their order.
    pub fn append_and_save(&self, new_ids: &[i64]) -> Result<Vec<i64>, CatalogError> {
        let mut ids = self.list()?;
        for id in new_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }

        let bytes = serde_json::to_vec(&ids)?;
        self.store
            .put(self.store_name, INDEX_KEY, bytes, &Metadata::new())?;
        info!(count = ids.len(), "saved product index");
        Ok(ids)
    }
}
