//! Persistence round trips through the file-backed store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use basket_cart::{CartStore, FileStore, KeyValueStore, LoadDiagnostic};
use basket_core::{Price, ProductId};
use basket_integration_tests::line;
use tempfile::TempDir;

#[test]
fn test_reopened_store_sees_same_cart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = CartStore::initialize(FileStore::new(&path));
    store
        .replace(vec![line(3, 700, 1), line(1, 1200, 2), line(2, 50, 4)])
        .unwrap();
    store.increment(ProductId::new(3)).unwrap();
    store.decrement_or_remove(ProductId::new(2)).unwrap();
    let expected = store.cart().clone();
    drop(store);

    let reopened = CartStore::initialize(FileStore::new(&path));
    assert!(matches!(reopened.diagnostic(), LoadDiagnostic::Loaded { lines: 3 }));
    assert_eq!(reopened.cart(), &expected);

    let ids: Vec<i64> = reopened.cart().items().iter().map(|i| i.id.as_i64()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_reads_cart_written_by_another_client() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let value = r#"[{"id":10,"name":"Linen shirt","price":39000,"imageUrl":"https://cdn.example/10.jpg","quantity":2},{"id":11,"name":"Socks","price":4500.5,"imageUrl":"","quantity":1}]"#;
    FileStore::new(&path).set("cartItems", value).unwrap();

    let store = CartStore::initialize(FileStore::new(&path));
    let items = store.cart().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Linen shirt");
    assert_eq!(items[0].image_url, "https://cdn.example/10.jpg");
    assert_eq!(store.total().to_string(), "82500.5");
}

#[test]
fn test_other_keys_survive_cart_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    FileStore::new(&path).set("theme", "dark").unwrap();

    let mut store = CartStore::initialize(FileStore::new(&path));
    store.replace(vec![line(1, 100, 1)]).unwrap();

    assert_eq!(
        FileStore::new(&path).get("theme").unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "{{{{").unwrap();

    let store = CartStore::initialize(FileStore::new(&path));
    assert!(store.cart().is_empty());
    assert!(matches!(store.diagnostic(), LoadDiagnostic::Unavailable(_)));
    assert_eq!(store.total(), Price::ZERO);
}

#[test]
fn test_separate_keys_hold_separate_carts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut main = CartStore::initialize(FileStore::new(&path));
    main.replace(vec![line(1, 100, 1)]).unwrap();

    let guest = CartStore::with_key(FileStore::new(&path), "guestCart");
    assert!(guest.cart().is_empty());
    assert!(matches!(guest.diagnostic(), LoadDiagnostic::Absent));
}
