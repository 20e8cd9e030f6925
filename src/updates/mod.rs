//! Stock updates - payload normalization and batch application.
//!
//! An update batch arrives either as `{"updates": [...]}` (direct call) or
//! wrapped as `{"data": {"updates": [...]}}` (broker event envelope). Both
//! normalize to the same canonical list of [`StockUpdate`]s, which the
//! [`StockUpdateProcessor`] applies item by item.
//!
//! ## Example
//!
//! ```ignore
//! use stock_catalog::updates::{normalize, StockUpdateProcessor};
//!
//! let updates = normalize(br#"{"data":{"updates":[{"id":1,"purchaseQty":2}]}}"#)?;
//! let report = StockUpdateProcessor::new(&repo).apply(&updates)?;
//! ```
//!
//! [`StockUpdate`]: crate::StockUpdate

mod envelope;
mod processor;

pub use envelope::{normalize, DirectUpdatePayload, UpdatePayload, WrappedUpdatePayload};
pub use processor::{AppliedUpdate, SkippedUpdate, StockUpdateProcessor, UpdateReport};
