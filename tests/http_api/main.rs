//! HTTP surface integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

#![cfg(feature = "http")]

use serde_json::{json, Value};
use stock_catalog::catalog::{seed_catalog, starter_products};
use stock_catalog::http::{self, AppState};
use stock_catalog::{
    CatalogConfig, CatalogRepository, InMemoryKeyValueStore, KeyValueStore, Metadata,
};

fn seeded_state() -> (InMemoryKeyValueStore, AppState<InMemoryKeyValueStore>) {
    let store = InMemoryKeyValueStore::new();
    let repo = CatalogRepository::new(store.clone(), CatalogConfig::default());
    seed_catalog(&repo, &starter_products()).unwrap();
    (store, AppState::new(repo, "orderpubsub", "stockUpdate"))
}

/// Bind to port 0 and return the actual address.
async fn start_server(state: AppState<InMemoryKeyValueStore>) -> String {
    let app = http::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get_json(url: String) -> Value {
    reqwest::get(url).await.unwrap().json().await.unwrap()
}

#[tokio::test]
async fn health_and_readiness() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();

    let body: Value = get_json(format!("{base}/healthz")).await;
    assert_eq!(body, json!({ "status": "healthy" }));

    let body: Value = get_json(format!("{base}/ready")).await;
    assert_eq!(body, json!({ "status": "ready" }));
}

#[tokio::test]
async fn subscription_endpoints_advertise_update_route() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();
    let expected = json!({
        "pubsubname": "orderpubsub",
        "topic": "stockUpdate",
        "route": "/updateStock"
    });

    let body: Value = get_json(format!("{base}/dapr/subscribe")).await;
    assert_eq!(body, json!([expected.clone()]));

    let body: Value = get_json(format!("{base}/dapr/config")).await;
    assert_eq!(body, json!({ "subscriptions": [expected] }));
}

#[tokio::test]
async fn lists_seeded_products() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 40);
    assert_eq!(products[0]["name"], "Ultra HD Smart TV");
    assert_eq!(
        products[0]["imageUrl"],
        "https://loremflickr.com/320/240/Ultra+HD+Smart+TV"
    );
}

#[tokio::test]
async fn empty_catalog_lists_empty_array() {
    let repo = CatalogRepository::new(InMemoryKeyValueStore::new(), CatalogConfig::default());
    let base = start_server(AppState::new(repo, "orderpubsub", "stockUpdate")).await;

    let body: Value = get_json(format!("{base}/products")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_product_by_id() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;

    let resp = reqwest::get(format!("{base}/product/3")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Wireless Bluetooth Headphones");
    assert_eq!(body["quantity"], 15);
}

#[tokio::test]
async fn unknown_product_returns_404() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;

    let resp = reqwest::get(format!("{base}/product/999")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;

    let resp = reqwest::get(format!("{base}/product/abc")).await.unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn undecodable_product_returns_500() {
    let (store, state) = seeded_state();
    store
        .put("statestore", "product-7", b"<xml/>".to_vec(), &Metadata::new())
        .unwrap();
    let base = start_server(state).await;

    let resp = reqwest::get(format!("{base}/product/7")).await.unwrap();
    assert_eq!(resp.status(), 500);
}

#[tokio::test]
async fn store_product_then_fetch_it() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/product"))
        .json(&json!({
            "id": 41,
            "name": "Standing Desk",
            "category": "Home Office",
            "price": 349.5,
            "description": "Height-adjustable desk.",
            "imageUrl": "https://loremflickr.com/320/240/Standing+Desk",
            "quantity": 6,
            "tags": ["desk", "office"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Product stored successfully!" }));

    let body: Value = get_json(format!("{base}/product/41")).await;
    assert_eq!(body["name"], "Standing Desk");

    // Not indexed, so not listed.
    let body: Value = get_json(format!("{base}/products")).await;
    assert_eq!(body.as_array().unwrap().len(), 40);
}

#[tokio::test]
async fn store_product_with_null_tags() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/product"))
        .json(&json!({ "id": 42, "name": "Desk Lamp", "quantity": 2, "tags": null }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = get_json(format!("{base}/product/42")).await;
    assert_eq!(body["name"], "Desk Lamp");
    assert_eq!(body["tags"], json!([]));
}

#[tokio::test]
async fn invalid_product_body_returns_400() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/product"))
        .header("content-type", "application/json")
        .body(r#"{"name": "no id"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid request" }));
}

#[tokio::test]
async fn direct_update_request() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/updateStock"))
        .json(&json!({ "updates": [{ "id": 1, "purchaseQty": 3 }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Stock updated successfully!");
    assert_eq!(body["applied"][0]["quantity"], 7);
    assert_eq!(body["complete"], true);

    let product: Value = get_json(format!("{base}/product/1")).await;
    assert_eq!(product["quantity"], 7);
}

#[tokio::test]
async fn broker_event_update_with_missing_item() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/updateStock"))
        .json(&json!({
            "specversion": "1.0",
            "type": "com.dapr.event.sent",
            "topic": "stockUpdate",
            "data": { "updates": [
                { "id": 2, "purchaseQty": 1 },
                { "id": 99, "purchaseQty": 1 }
            ] }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["applied"].as_array().unwrap().len(), 1);
    assert_eq!(body["skipped"][0]["id"], 99);
    assert_eq!(body["complete"], false);

    let product: Value = get_json(format!("{base}/product/2")).await;
    assert_eq!(product["quantity"], 7);
}

#[tokio::test]
async fn malformed_update_returns_400() {
    let (_, state) = seeded_state();
    let base = start_server(state).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/updateStock"))
        .json(&json!({ "items": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid request format" }));
}
