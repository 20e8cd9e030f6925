//! Bootstrap seeding of an empty catalog.

use tracing::{debug, info, warn};

use super::CatalogRepository;
use crate::error::CatalogError;
use crate::product::Product;
use crate::store::KeyValueStore;

/// What a seeding pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReport {
    /// The index already listed products; nothing was written.
    AlreadySeeded { existing: usize },
    /// Products were written and the successful ids indexed.
    Seeded { stored: Vec<i64>, failed: Vec<i64> },
}

/// Populate the catalog with `products` unless the index is non-empty.
///
/// Individual write failures are logged and left out of the index. Index
/// read or write failures are returned.
pub fn seed_catalog<S: KeyValueStore>(
    repo: &CatalogRepository<S>,
    products: &[Product],
) -> Result<SeedReport, CatalogError> {
    let existing = repo.index().list()?;
    debug!(?existing, "retrieved product ids");
    if !existing.is_empty() {
        info!(count = existing.len(), "products already initialized in state store");
        return Ok(SeedReport::AlreadySeeded {
            existing: existing.len(),
        });
    }

    info!(count = products.len(), "adding initial products to state store");
    let mut stored = Vec::with_capacity(products.len());
    let mut failed = Vec::new();

    for product in products {
        match repo.put(product.id, product) {
            Ok(()) => {
                debug!(product_id = product.id, "initialized product");
                stored.push(product.id);
            }
            Err(error) => {
                warn!(product_id = product.id, error = %error, "failed to save initial product");
                failed.push(product.id);
            }
        }
    }

    if !stored.is_empty() {
        repo.index().append_and_save(&stored)?;
    }

    info!(
        stored = stored.len(),
        failed = failed.len(),
        "completed initializing sample products"
    );
    Ok(SeedReport::Seeded { stored, failed })
}
