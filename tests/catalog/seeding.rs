//! Bootstrap seeding.

use stock_catalog::catalog::{seed_catalog, starter_products};
use stock_catalog::{CatalogConfig, CatalogRepository, Product, SeedReport};

use crate::support::FlakyStore;

fn repo(store: &FlakyStore) -> CatalogRepository<FlakyStore> {
    CatalogRepository::new(store.clone(), CatalogConfig::default())
}

#[test]
fn seeds_the_starter_set() {
    let store = FlakyStore::new();
    let repo = repo(&store);

    let report = seed_catalog(&repo, &starter_products()).unwrap();

    let SeedReport::Seeded { stored, failed } = report else {
        panic!("expected a seeding pass");
    };
    assert_eq!(stored.len(), 40);
    assert!(failed.is_empty());
    assert_eq!(repo.list_all().unwrap(), starter_products());
}

#[test]
fn seeding_twice_matches_seeding_once() {
    let store = FlakyStore::new();
    let repo = repo(&store);

    seed_catalog(&repo, &starter_products()).unwrap();
    let index_once = store.raw("productIDs");
    let catalog_once = repo.list_all().unwrap();

    let report = seed_catalog(&repo, &starter_products()).unwrap();

    assert_eq!(report, SeedReport::AlreadySeeded { existing: 40 });
    assert_eq!(store.raw("productIDs"), index_once);
    assert_eq!(repo.list_all().unwrap(), catalog_once);
}

#[test]
fn existing_catalog_is_never_overwritten() {
    let store = FlakyStore::new();
    let repo = repo(&store);
    repo.put(1, &Product::new(1, "Custom").with_quantity(3)).unwrap();
    repo.index().append_and_save(&[1]).unwrap();

    seed_catalog(&repo, &starter_products()).unwrap();

    assert_eq!(repo.get(1).unwrap().name, "Custom");
    assert!(repo.get(2).unwrap_err().is_not_found());
}

#[test]
fn failed_writes_are_left_out_of_the_index() {
    let store = FlakyStore::new();
    store.fail_put("product-2");
    let repo = repo(&store);
    let products = vec![
        Product::new(1, "TV"),
        Product::new(2, "Camera"),
        Product::new(3, "Headphones"),
    ];

    let report = seed_catalog(&repo, &products).unwrap();

    assert_eq!(
        report,
        SeedReport::Seeded {
            stored: vec![1, 3],
            failed: vec![2]
        }
    );
    assert_eq!(repo.index().list().unwrap(), vec![1, 3]);
}

#[test]
fn index_write_failure_is_returned() {
    let store = FlakyStore::new();
    store.fail_put("productIDs");
    let repo = repo(&store);

    assert!(seed_catalog(&repo, &[Product::new(1, "TV")]).is_err());
}

#[test]
fn unreadable_index_stops_seeding() {
    let store = FlakyStore::new();
    store.fail_get("productIDs");
    let repo = repo(&store);

    assert!(seed_catalog(&repo, &starter_products()).is_err());
    assert!(store.raw("product-1").is_none());
}
