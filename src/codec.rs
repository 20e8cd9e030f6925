//! Value codec for records read back from the state store.
//!
//! Values are written as plain JSON. Depending on the path a value took
//! through the store they come back either as that JSON or as a quoted
//! base64 string wrapping it, so `decode` accepts both.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

/// Both decode paths failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a JSON record ({direct}); not a base64-wrapped JSON record ({wrapped})")]
pub struct DecodeError {
    /// Why the bytes were not a JSON record.
    pub direct: String,
    /// Why the quote-stripped, base64-decoded bytes were not a JSON record.
    pub wrapped: String,
}

/// Serialize a record to the bytes stored under its key.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

/// Deserialize a stored record, accepting raw JSON or a quoted base64 blob.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let direct = match serde_json::from_slice(bytes) {
        Ok(value) => return Ok(value),
        Err(e) => e.to_string(),
    };
    debug!(error = %direct, "direct decode failed, trying base64-wrapped form");

    let wrapped = match STANDARD.decode(strip_quotes(bytes)) {
        Ok(inner) => match serde_json::from_slice(&inner) {
            Ok(value) => return Ok(value),
            Err(e) => e.to_string(),
        },
        Err(e) => format!("base64: {}", e),
    };

    Err(DecodeError { direct, wrapped })
}

/// Drop one surrounding `"` from each end, if present.
fn strip_quotes(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_prefix(b"\"").unwrap_or(bytes);
    bytes.strip_suffix(b"\"").unwrap_or(bytes)
}
