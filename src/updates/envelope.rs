//! Update payload shapes and their disambiguation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::product::StockUpdate;

/// `{"updates": [...]}` as sent by a direct caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectUpdatePayload {
    #[serde(default)]
    pub updates: Option<Vec<StockUpdate>>,
}

/// `{"data": {"updates": [...]}}` as delivered by the message broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedUpdatePayload {
    #[serde(default)]
    pub data: DirectUpdatePayload,
}

/// A recognised update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePayload {
    Direct(DirectUpdatePayload),
    Wrapped(WrappedUpdatePayload),
}

impl UpdatePayload {
    /// Recognise `body` as one of the two shapes.
    ///
    /// The wrapped shape wins only when it parses and its inner `updates`
    /// field is present. Otherwise the body must parse as the direct shape
    /// with `updates` present. An empty `updates` array counts as present.
    pub fn parse(body: &[u8]) -> Result<Self, CatalogError> {
        match serde_json::from_slice::<WrappedUpdatePayload>(body) {
            Ok(wrapped) if wrapped.data.updates.is_some() => {
                debug!("processed as broker event request");
                return Ok(UpdatePayload::Wrapped(wrapped));
            }
            Ok(_) => debug!("no wrapped updates field, trying direct shape"),
            Err(e) => debug!(error = %e, "not a broker event request"),
        }

        let direct: DirectUpdatePayload = serde_json::from_slice(body)
            .map_err(|e| CatalogError::Format(e.to_string()))?;
        if direct.updates.is_none() {
            return Err(CatalogError::Format("missing `updates` field".into()));
        }
        debug!("processed as direct request");
        Ok(UpdatePayload::Direct(direct))
    }

    /// The canonical update list, in payload order.
    pub fn into_updates(self) -> Vec<StockUpdate> {
        let inner = match self {
            UpdatePayload::Direct(direct) => direct,
            UpdatePayload::Wrapped(wrapped) => wrapped.data,
        };
        inner.updates.unwrap_or_default()
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, UpdatePayload::Wrapped(_))
    }
}

/// Normalize a raw request body into the canonical update list.
pub fn normalize(body: &[u8]) -> Result<Vec<StockUpdate>, CatalogError> {
    UpdatePayload::parse(body).map(UpdatePayload::into_updates)
}
