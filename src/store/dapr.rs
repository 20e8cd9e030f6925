//! Dapr sidecar state store over the HTTP state API.
//!
//! Requires the `dapr` feature. Calls are blocking; async callers should
//! run them on a blocking thread.
//!
//! ## Routes used
//!
//! - `GET  {endpoint}/v1.0/healthz` - sidecar readiness probe.
//! - `GET  {endpoint}/v1.0/state/{store}/{key}` - 200 with the value, 204 when absent.
//! - `POST {endpoint}/v1.0/state/{store}` - `[{"key", "value", "metadata"}]`.
//!
//! Values that are valid JSON are saved as JSON. Anything else is saved as a
//! base64 JSON string, which the sidecar hands back still quoted.

use std::thread;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{KeyValueStore, Metadata, StoreError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct StateItem<'a> {
    key: &'a str,
    value: Value,
    metadata: &'a Metadata,
}

/// Key-value port backed by a Dapr sidecar.
#[derive(Clone, Debug)]
pub struct DaprStateStore {
    client: Client,
    endpoint: String,
}

impl DaprStateStore {
    /// Build a store for `endpoint` (e.g. `http://localhost:3500`) without probing it.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a store and wait until the sidecar answers its health probe.
    ///
    /// Makes at most `max_retries` attempts, sleeping `delay` between them.
    pub fn connect(
        endpoint: impl Into<String>,
        max_retries: u32,
        delay: Duration,
    ) -> Result<Self, StoreError> {
        let store = Self::new(endpoint)?;
        let attempts = max_retries.max(1);
        let mut last_error = StoreError::Unavailable("no connection attempt made".into());

        for attempt in 1..=attempts {
            match store.health() {
                Ok(()) => {
                    info!(endpoint = %store.endpoint, attempt, "connected to dapr sidecar");
                    return Ok(store);
                }
                Err(error) => {
                    warn!(
                        endpoint = %store.endpoint,
                        attempt,
                        max_attempts = attempts,
                        error = %error,
                        "failed to reach dapr sidecar"
                    );
                    last_error = error;
                }
            }
            if attempt < attempts {
                thread::sleep(delay);
            }
        }

        Err(StoreError::Unavailable(format!(
            "all {} connection attempts failed: {}",
            attempts, last_error
        )))
    }

    /// Probe the sidecar's health endpoint.
    pub fn health(&self) -> Result<(), StoreError> {
        let response = self
            .client
            .get(format!("{}/v1.0/healthz", self.endpoint))
            .send()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejected(response))
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn state_url(&self, store: &str) -> String {
        format!("{}/v1.0/state/{}", self.endpoint, store)
    }
}

fn rejected(response: reqwest::blocking::Response) -> StoreError {
    let status = response.status().as_u16();
    let message = response.text().unwrap_or_default();
    StoreError::Rejected { status, message }
}

/// JSON bytes travel as JSON; anything else as a base64 string.
fn wire_value(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::String(STANDARD.encode(bytes)))
}

impl KeyValueStore for DaprStateStore {
    fn get(&self, store: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let url = format!("{}/{}", self.state_url(store), key);
        debug!(%url, "dapr state get");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let bytes = response
                    .bytes()
                    .map_err(|e| StoreError::Transport(e.to_string()))?;
                Ok(Some(bytes.to_vec()))
            }
            _ => Err(rejected(response)),
        }
    }

    fn put(
        &self,
        store: &str,
        key: &str,
        value: Vec<u8>,
        metadata: &Metadata,
    ) -> Result<(), StoreError> {
        let body = [StateItem {
            key,
            value: wire_value(&value),
            metadata,
        }];
        debug!(store, key, "dapr state save");
        let response = self
            .client
            .post(self.state_url(store))
            .json(&body)
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejected(response))
        }
    }
}
