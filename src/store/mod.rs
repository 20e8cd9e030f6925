//! Key-Value Port - the opaque state store the catalog persists through.
//!
//! The port offers single-key `get` and `put` scoped by a store name. There is
//! no scan, no delete and no cross-key transaction; callers that need to
//! enumerate keys keep their own index.
//!
//! ## Example
//!
//! ```ignore
//! use stock_catalog::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let store = InMemoryKeyValueStore::new();
//! store.put("statestore", "greeting", b"\"hi\"".to_vec(), &Default::default())?;
//! let bytes = store.get("statestore", "greeting")?;
//! ```

#[cfg(feature = "dapr")]
pub mod dapr;
mod in_memory;

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

pub use in_memory::InMemoryKeyValueStore;

/// Per-write metadata forwarded to the backing store untouched.
pub type Metadata = HashMap<String, String>;

/// Failure reported by a key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("state store unavailable: {0}")]
    Unavailable(String),
    /// The backend answered but refused the operation.
    #[error("state store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("state store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    /// Request or response could not be carried over the wire.
    #[error("state store transport error: {0}")]
    Transport(String),
}

/// Single-key atomic get/put over named stores.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw bytes under `key`. `Ok(None)` when the key is absent.
    fn get(&self, store: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing whatever was there.
    fn put(
        &self,
        store: &str,
        key: &str,
        value: Vec<u8>,
        metadata: &Metadata,
    ) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, store: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(store, key)
    }

    fn put(
        &self,
        store: &str,
        key: &str,
        value: Vec<u8>,
        metadata: &Metadata,
    ) -> Result<(), StoreError> {
        (**self).put(store, key, value, metadata)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, store: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(store, key)
    }

    fn put(
        &self,
        store: &str,
        key: &str,
        value: Vec<u8>,
        metadata: &Metadata,
    ) -> Result<(), StoreError> {
        (**self).put(store, key, value, metadata)
    }
}
