//! Normalized update batches applied through the processor.

use stock_catalog::updates::normalize;
use stock_catalog::{
    CatalogConfig, CatalogError, CatalogRepository, Product, StockUpdate, StockUpdateProcessor,
};

use crate::support::FlakyStore;

fn seeded(store: &FlakyStore, products: &[Product]) -> CatalogRepository<FlakyStore> {
    let repo = CatalogRepository::new(store.clone(), CatalogConfig::default());
    for product in products {
        repo.put(product.id, product).unwrap();
    }
    repo
}

#[test]
fn wrapped_batch_updates_quantity() {
    let store = FlakyStore::new();
    let repo = seeded(&store, &[Product::new(5, "Drive").with_quantity(10)]);

    let updates = normalize(br#"{"data":{"updates":[{"id":5,"purchaseQty":3}]}}"#).unwrap();
    StockUpdateProcessor::new(&repo).apply(&updates).unwrap();

    assert_eq!(repo.get(5).unwrap().quantity, 7);
}

#[test]
fn missing_product_does_not_stop_the_batch() {
    let store = FlakyStore::new();
    let repo = seeded(&store, &[Product::new(1, "TV").with_quantity(10)]);

    let report = StockUpdateProcessor::new(&repo)
        .apply(&[StockUpdate::new(99, 1), StockUpdate::new(1, 2)])
        .unwrap();

    assert_eq!(repo.get(1).unwrap().quantity, 8);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].id, 99);
    assert!(report.skipped[0].reason.contains("not found"));
}

#[test]
fn read_failures_are_skipped() {
    let store = FlakyStore::new();
    let repo = seeded(
        &store,
        &[
            Product::new(1, "TV").with_quantity(10),
            Product::new(2, "Camera").with_quantity(10),
        ],
    );
    store.fail_get("product-1");
    store.set_raw("product-3", "\"%%%\"");

    let report = StockUpdateProcessor::new(&repo)
        .apply(&[
            StockUpdate::new(1, 1),
            StockUpdate::new(3, 1),
            StockUpdate::new(2, 4),
        ])
        .unwrap();

    let skipped: Vec<i64> = report.skipped.iter().map(|s| s.id).collect();
    assert_eq!(skipped, vec![1, 3]);
    assert_eq!(repo.get(2).unwrap().quantity, 6);
}

#[test]
fn write_failure_aborts_the_batch() {
    let store = FlakyStore::new();
    let repo = seeded(
        &store,
        &[
            Product::new(1, "TV").with_quantity(10),
            Product::new(2, "Camera").with_quantity(10),
            Product::new(3, "Headphones").with_quantity(10),
        ],
    );
    store.fail_put("product-2");

    let err = StockUpdateProcessor::new(&repo)
        .apply(&[
            StockUpdate::new(1, 1),
            StockUpdate::new(2, 1),
            StockUpdate::new(3, 1),
        ])
        .unwrap_err();

    assert!(matches!(err, CatalogError::Store(_)));
    assert_eq!(repo.get(1).unwrap().quantity, 9);
    assert_eq!(repo.get(2).unwrap().quantity, 10);
    assert_eq!(repo.get(3).unwrap().quantity, 10);
}

#[test]
fn updated_product_keeps_other_fields() {
    let store = FlakyStore::new();
    let original = Product::new(4, "Smartphone 12 Pro")
        .with_category("Electronics")
        .with_price(999.99)
        .with_tags(["smartphone", "mobile"])
        .with_quantity(20);
    let repo = seeded(&store, &[original.clone()]);

    StockUpdateProcessor::new(&repo)
        .apply(&[StockUpdate::new(4, 5)])
        .unwrap();

    assert_eq!(repo.get(4).unwrap(), original.with_quantity(15));
}
