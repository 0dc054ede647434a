//! Integration tests for Basket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p basket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Walkthroughs of cart edits against an in-memory store
//! - `cart_properties` - Invariants checked over generated edit sequences
//! - `file_storage` - Persistence round trips through the file-backed store
//!
//! Shared fixtures live here so every test file builds carts the same way.

use basket_cart::{CartStore, DEFAULT_STORAGE_KEY, MemoryStore};
use basket_core::{Cart, LineItem, Price, ProductId};

/// A line item with a generated name and image.
#[must_use]
pub fn line(id: i64, price: u64, quantity: u32) -> LineItem {
    LineItem::new(
        ProductId::new(id),
        format!("Product {id}"),
        Price::from_units(price),
        format!("https://cdn.example/{id}.jpg"),
        quantity,
    )
}

/// Encode `items` the way a stored cart looks.
///
/// # Panics
///
/// Panics if the items cannot be serialized.
#[must_use]
#[allow(clippy::expect_used)]
pub fn stored(items: &[LineItem]) -> String {
    serde_json::to_string(items).expect("line items serialize")
}

/// A cart store whose backing store already holds `items`.
#[must_use]
pub fn store_with(items: &[LineItem]) -> CartStore<MemoryStore> {
    CartStore::initialize(MemoryStore::with_value(DEFAULT_STORAGE_KEY, stored(items)))
}

/// Decode what the store last persisted.
///
/// # Panics
///
/// Panics if nothing is stored or the stored value does not decode.
#[must_use]
#[allow(clippy::expect_used)]
pub fn persisted(store: &CartStore<MemoryStore>) -> Cart {
    let raw = store
        .storage()
        .raw(store.key())
        .expect("cart has been persisted");
    basket_cart::codec::decode(raw).expect("persisted cart decodes")
}
