//! Quantity commands.
//!
//! # Usage
//!
//! ```bash
//! basket inc 2
//! basket dec 2
//! basket clear
//! ```

use basket_cart::{CartStore, KeyValueStore, Result};
use basket_core::{LineChange, ProductId};
use tracing::info;

/// Add one unit of a product already in the cart.
///
/// # Errors
///
/// Returns `CartError::ItemNotFound` if the product is not in the cart, or
/// `CartError::StorageUnavailable` if the change cannot be saved.
pub fn increment<S: KeyValueStore>(store: &mut CartStore<S>, id: ProductId) -> Result<()> {
    if let LineChange::Incremented(quantity) = store.increment(id)? {
        info!(product_id = %id, quantity, "Quantity increased");
    }
    Ok(())
}

/// Remove one unit of a product; unknown products are ignored.
///
/// # Errors
///
/// Returns `CartError::StorageUnavailable` if the change cannot be saved.
pub fn decrement<S: KeyValueStore>(store: &mut CartStore<S>, id: ProductId) -> Result<()> {
    match store.decrement_or_remove(id)? {
        LineChange::Decremented(quantity) => {
            info!(product_id = %id, quantity, "Quantity decreased");
        }
        LineChange::Removed => info!(product_id = %id, "Removed from cart"),
        LineChange::Unchanged => info!(product_id = %id, "Product not in cart, nothing to do"),
        LineChange::Incremented(_) => {}
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `CartError::StorageUnavailable` if the change cannot be saved.
pub fn clear<S: KeyValueStore>(store: &mut CartStore<S>) -> Result<()> {
    let lines = store.cart().len();
    store.clear()?;
    info!(lines, "Cart cleared");
    Ok(())
}
