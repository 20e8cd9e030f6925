use anyhow::{Context, Result};
use stock_catalog::catalog::{seed_catalog, starter_products};
use stock_catalog::config::LoggingConfig;
use stock_catalog::http::{self, AppState};
use stock_catalog::{CatalogRepository, DaprStateStore, LogFormat, SeedReport, ServiceConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    let config = ServiceConfig::from_env()?;
    init_logging(&config.logging);

    // The state store client blocks, so connect and seed before the runtime starts.
    let store = DaprStateStore::connect(
        config.dapr_http_endpoint.clone(),
        config.max_retries,
        config.retry_delay,
    )
    .context("could not connect to the dapr sidecar")?;
    let repo = CatalogRepository::new(store, config.catalog.clone());

    let report = seed_catalog(&repo, &starter_products())
        .context("error initializing sample products")?;
    if let SeedReport::Seeded { stored, .. } = &report {
        if let Some(&first) = stored.first() {
            match repo.get(first) {
                Ok(product) => {
                    info!(product_id = first, name = %product.name, "read back seeded product")
                }
                Err(error) => {
                    warn!(product_id = first, error = %error, "could not read back seeded product")
                }
            }
        }
    }

    let state = AppState::new(
        repo,
        config.pubsub_name.clone(),
        config.stock_update_topic.clone(),
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(http::serve(state, &config.listen_address()))
        .context("failed to start the server")?;
    Ok(())
}
