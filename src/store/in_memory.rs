//! InMemoryKeyValueStore - HashMap-backed state store for tests and local runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KeyValueStore, Metadata, StoreError};

/// In-memory key-value store.
///
/// Storage key is `"store||key"`. Clone-friendly via Arc; clones share data.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    storage: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn make_key(store: &str, key: &str) -> String {
        format!("{}||{}", store, key)
    }

    /// Number of keys held across all stores.
    pub fn len(&self) -> usize {
        self.storage.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, store: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(storage.get(&Self::make_key(store, key)).cloned())
    }

    fn put(
        &self,
        store: &str,
        key: &str,
        value: Vec<u8>,
        _metadata: &Metadata,
    ) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("put"))?;
        storage.insert(Self::make_key(store, key), value);
        Ok(())
    }
}
