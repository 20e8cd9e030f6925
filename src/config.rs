//! Service configuration loaded from environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogConfig;

pub const DEFAULT_PUBSUB: &str = "orderpubsub";
pub const DEFAULT_STOCK_UPDATE_TOPIC: &str = "stockUpdate";
pub const DEFAULT_DAPR_HTTP_PORT: u16 = 3500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub catalog: CatalogConfig,
    pub pubsub_name: String,
    pub stock_update_topic: String,
    /// Connection attempts made against the state store at startup.
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub bind_address: String,
    pub port: u16,
    pub dapr_http_endpoint: String,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for `{key}`: `{value}`")]
    InvalidValue { key: String, value: String },
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            pubsub_name: DEFAULT_PUBSUB.to_string(),
            stock_update_topic: DEFAULT_STOCK_UPDATE_TOPIC.to_string(),
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            dapr_http_endpoint: format!("http://localhost:{}", DEFAULT_DAPR_HTTP_PORT),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Compact,
            },
        }
    }
}

impl ServiceConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(name) = var("STATE_STORE_NAME") {
            config.catalog = CatalogConfig::new(name);
        }
        if let Some(name) = var("PUBSUB_NAME") {
            config.pubsub_name = name;
        }
        if let Some(topic) = var("STOCK_UPDATE_TOPIC") {
            config.stock_update_topic = topic;
        }
        if let Some(value) = var("MAX_RETRIES") {
            config.max_retries = parse("MAX_RETRIES", &value)?;
        }
        if let Some(value) = var("RETRY_DELAY_MS") {
            config.retry_delay = Duration::from_millis(parse("RETRY_DELAY_MS", &value)?);
        }
        if let Some(address) = var("BIND_ADDRESS") {
            config.bind_address = address;
        }
        if let Some(value) = var("PORT") {
            config.port = parse("PORT", &value)?;
        }
        if let Some(endpoint) = var("DAPR_HTTP_ENDPOINT") {
            config.dapr_http_endpoint = endpoint;
        } else if let Some(value) = var("DAPR_HTTP_PORT") {
            let port: u16 = parse("DAPR_HTTP_PORT", &value)?;
            config.dapr_http_endpoint = format!("http://localhost:{}", port);
        }
        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(value) = var("LOG_FORMAT") {
            config.logging.format = match value.to_ascii_lowercase().as_str() {
                "compact" => LogFormat::Compact,
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(invalid("LOG_FORMAT", &value)),
            };
        }

        Ok(config)
    }

    /// `bind_address:port` for the HTTP listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn state_store_name(&self) -> &str {
        &self.catalog.state_store_name
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
