//! HTTP transport for the catalog.
//!
//! Requires the `http` feature. Uses axum for routing. The key-value port is
//! synchronous, so every catalog call runs on tokio's blocking pool.
//!
//! ## Routes
//!
//! - `POST /product` - store one product.
//! - `GET /products` - every indexed product.
//! - `GET /product/:productid` - one product, 404 when absent.
//! - `POST /updateStock` - apply a direct or broker-wrapped update batch.
//! - `GET /healthz`, `GET /ready` - liveness and readiness probes.
//! - `GET /dapr/config`, `GET /dapr/subscribe` - advertise `/updateStock` as
//!   the target of the stock-update topic.
//!
//! ## Example
//!
//! ```ignore
//! use stock_catalog::http::{self, AppState};
//!
//! let state = AppState::new(repo, "orderpubsub", "stockUpdate");
//! http::serve(state, "0.0.0.0:8080").await?;
//! ```

mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tracing::info;

use crate::catalog::CatalogRepository;
use crate::store::KeyValueStore;

pub use error::ApiError;

/// Route that receives broker-delivered stock updates.
pub const UPDATE_STOCK_ROUTE: &str = "/updateStock";

/// One pub/sub subscription as the sidecar expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub pubsubname: String,
    pub topic: String,
    pub route: String,
}

/// Shared handler state.
pub struct AppState<S> {
    repo: Arc<CatalogRepository<S>>,
    subscription: Subscription,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            subscription: self.subscription.clone(),
        }
    }
}

impl<S: KeyValueStore + 'static> AppState<S> {
    pub fn new(
        repo: CatalogRepository<S>,
        pubsub_name: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            repo: Arc::new(repo),
            subscription: Subscription {
                pubsubname: pubsub_name.into(),
                topic: topic.into(),
                route: UPDATE_STOCK_ROUTE.to_string(),
            },
        }
    }

    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

/// Build an axum `Router` serving the catalog.
pub fn router<S: KeyValueStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route("/dapr/config", get(handlers::dapr_config::<S>))
        .route("/dapr/subscribe", get(handlers::dapr_subscribe::<S>))
        .route("/product", post(handlers::store_product::<S>))
        .route("/products", get(handlers::list_products::<S>))
        .route("/product/:productid", get(handlers::get_product::<S>))
        .route(UPDATE_STOCK_ROUTE, post(handlers::update_stock::<S>))
        .with_state(state)
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<S: KeyValueStore + 'static>(
    state: AppState<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "stock service listening");
    axum::serve(listener, router(state)).await
}
