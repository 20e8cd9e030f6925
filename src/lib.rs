pub mod catalog;
pub mod codec;
pub mod config;
mod error;
mod product;
pub mod store;
pub mod updates;

#[cfg(feature = "http")]
pub mod http;

pub use catalog::{CatalogConfig, CatalogIndex, CatalogRepository, SeedReport};
pub use codec::DecodeError;
pub use config::{ConfigError, LogFormat, ServiceConfig};
pub use error::CatalogError;
pub use product::{Product, StockUpdate};
pub use store::{InMemoryKeyValueStore, KeyValueStore, Metadata, StoreError};
pub use updates::{StockUpdateProcessor, UpdateReport};

#[cfg(feature = "dapr")]
pub use store::dapr::DaprStateStore;
