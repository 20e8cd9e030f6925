use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::error::ApiError;
use super::AppState;
use crate::catalog::CatalogRepository;
use crate::error::CatalogError;
use crate::product::Product;
use crate::store::KeyValueStore;
use crate::updates::{StockUpdateProcessor, UpdatePayload};

/// Run a catalog call on the blocking pool.
async fn blocking<S, T, F>(state: &AppState<S>, f: F) -> Result<T, ApiError>
where
    S: KeyValueStore + 'static,
    T: Send + 'static,
    F: FnOnce(&CatalogRepository<S>) -> Result<T, CatalogError> + Send + 'static,
{
    let repo = state.repo.clone();
    let result = tokio::task::spawn_blocking(move || f(&repo)).await?;
    Ok(result?)
}

/// `GET /healthz`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `GET /ready`
pub async fn ready() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}

/// `GET /dapr/config`
pub async fn dapr_config<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
) -> Json<Value> {
    Json(json!({ "subscriptions": [state.subscription()] }))
}

/// `GET /dapr/subscribe`
pub async fn dapr_subscribe<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
) -> Json<Value> {
    Json(json!([state.subscription()]))
}

/// `POST /product`
pub async fn store_product<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(product) = body.map_err(|rejection| {
        debug!(error = %rejection, "rejected product body");
        ApiError::BadRequest("Invalid request")
    })?;

    blocking(&state, move |repo| repo.put(product.id, &product)).await?;
    Ok(Json(json!({ "message": "Product stored successfully!" })))
}

/// `GET /products`
pub async fn list_products<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = blocking(&state, |repo| repo.list_all()).await?;
    if products.is_empty() {
        info!("no products found in state store");
    }
    Ok(Json(products))
}

/// `GET /product/:productid`
pub async fn get_product<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id: i64 = product_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid product ID"))?;
    let product = blocking(&state, move |repo| repo.get(id)).await?;
    Ok(Json(product))
}

/// `POST /updateStock`
pub async fn update_stock<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    debug!(body = %String::from_utf8_lossy(&body), "stock update request body");

    let payload = UpdatePayload::parse(&body).map_err(|err| {
        warn!(error = %err, "rejected stock update payload");
        err
    })?;
    let source = if payload.is_wrapped() { "broker" } else { "direct" };
    let updates = payload.into_updates();
    info!(source, items = updates.len(), "received stock update");

    let report = blocking(&state, move |repo| {
        StockUpdateProcessor::new(repo).apply(&updates)
    })
    .await?;
    if !report.is_complete() {
        warn!(
            skipped = report.skipped.len(),
            "stock update finished with skipped items"
        );
    }

    Ok(Json(json!({
        "message": "Stock updated successfully!",
        "complete": report.is_complete(),
        "applied": report.applied,
        "skipped": report.skipped,
    })))
}
