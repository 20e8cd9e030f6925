use thiserror::Error;

use crate::codec::DecodeError;
use crate::store::StoreError;

/// Outcome taxonomy for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Key absent, or present with a nil value.
    #[error("product with ID {id} not found")]
    NotFound { id: i64 },
    /// Value present but unreadable by either codec path.
    #[error("{}", decode_message(.id, .source))]
    Decode {
        id: Option<i64>,
        #[source]
        source: DecodeError,
    },
    /// Update payload matched neither envelope shape.
    #[error("invalid request format: {0}")]
    Format(String),
    /// Underlying key-value port failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A record could not be serialized for writing.
    #[error("failed to encode record: {0}")]
    Encode(String),
    /// Decrementing stock would leave the quantity outside the `i64` range.
    #[error("stock for product with ID {id} cannot be reduced by {purchase_qty}")]
    QuantityOverflow { id: i64, purchase_qty: u64 },
}

fn decode_message(id: &Option<i64>, source: &DecodeError) -> String {
    match id {
        Some(id) => format!("failed to decode product with ID {}: {}", id, source),
        None => format!("failed to decode stored value: {}", source),
    }
}

impl CatalogError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::NotFound { .. } => 404,
            CatalogError::Decode { .. } => 500,
            CatalogError::Format(_) => 400,
            CatalogError::Store(_) => 500,
            CatalogError::Encode(_) => 500,
            CatalogError::QuantityOverflow { .. } => 400,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Encode(err.to_string())
    }
}
