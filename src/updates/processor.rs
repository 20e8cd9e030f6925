//! StockUpdateProcessor - applies a canonical update list to the catalog.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::catalog::CatalogRepository;
use crate::error::CatalogError;
use crate::product::StockUpdate;
use crate::store::KeyValueStore;

/// An update that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedUpdate {
    pub id: i64,
    pub purchase_qty: u64,
    /// Stock left after the update; may be negative.
    pub quantity: i64,
}

/// An update that was skipped because its product could not be read or its
/// stock could not be reduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedUpdate {
    pub id: i64,
    pub reason: String,
}

/// Result of a batch that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub applied: Vec<AppliedUpdate>,
    pub skipped: Vec<SkippedUpdate>,
}

impl UpdateReport {
    /// True when every item in the batch was written.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, id: i64, err: &CatalogError) {
        self.skipped.push(SkippedUpdate {
            id,
            reason: err.to_string(),
        });
    }
}

/// Applies stock decrements one item at a time, in input order.
///
/// A product that cannot be read (not found, undecodable, store error) is
/// skipped and the batch continues, as is one whose quantity would overflow.
/// A failed write aborts the batch; items before it stay written.
pub struct StockUpdateProcessor<'a, S> {
    repo: &'a CatalogRepository<S>,
}

impl<'a, S: KeyValueStore> StockUpdateProcessor<'a, S> {
    pub fn new(repo: &'a CatalogRepository<S>) -> Self {
        Self { repo }
    }

    pub fn apply(&self, updates: &[StockUpdate]) -> Result<UpdateReport, CatalogError> {
        info!(items = updates.len(), "starting stock update");
        let mut report = UpdateReport::default();

        for update in updates {
            info!(
                product_id = update.id,
                purchase_qty = update.purchase_qty,
                "processing stock update"
            );

            let mut product = match self.repo.get(update.id) {
                Ok(product) => product,
                Err(err) => {
                    warn!(product_id = update.id, error = %err, "skipping unreadable product");
                    report.skip(update.id, &err);
                    continue;
                }
            };

            let quantity = match product.take_stock(update.purchase_qty) {
                Ok(quantity) => quantity,
                Err(err) => {
                    warn!(product_id = update.id, error = %err, "skipping out-of-range update");
                    report.skip(update.id, &err);
                    continue;
                }
            };

            if let Err(err) = self.repo.put(update.id, &product) {
                error!(
                    product_id = update.id,
                    error = %err,
                    "failed to save product, aborting batch"
                );
                return Err(err);
            }
            info!(product_id = update.id, quantity, "updated quantity");

            report.applied.push(AppliedUpdate {
                id: update.id,
                purchase_qty: update.purchase_qty,
                quantity,
            });
        }

        info!(
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "stock update completed"
        );
        Ok(report)
    }
}
