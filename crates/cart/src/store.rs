//! The write-through cart store.
//!
//! [`CartStore`] owns the authoritative [`Cart`] for one view. It is loaded
//! once from a [`KeyValueStore`] and every mutation is written back under the
//! same key before it becomes visible in memory. If the write fails the
//! mutation is abandoned, so the in-memory cart and the stored value never
//! diverge because of a change made here.

use basket_core::{Cart, LineChange, LineItem, Price, ProductId, pricing};
use tracing::{debug, info, instrument, warn};

use crate::codec::{self, CodecError};
use crate::error::{CartError, Result};
use crate::storage::{KeyValueStore, StorageError};

/// Key the cart is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

/// What happened when the store loaded its initial cart.
#[derive(Debug)]
pub enum LoadDiagnostic {
    /// Nothing was stored; the cart starts empty.
    Absent,
    /// A stored cart was decoded.
    Loaded {
        /// Number of lines loaded.
        lines: usize,
    },
    /// A value was stored but did not decode; the cart starts empty.
    Malformed(CodecError),
    /// Storage could not be read; the cart starts empty.
    Unavailable(StorageError),
}

impl LoadDiagnostic {
    /// Whether loading fell back to an empty cart because of a fault.
    #[must_use]
    pub const fn is_anomaly(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Unavailable(_))
    }
}

/// Owns a cart and mirrors it to a key-value store.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    cart: Cart,
    diagnostic: LoadDiagnostic,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart stored under [`DEFAULT_STORAGE_KEY`].
    ///
    /// See [`CartStore::with_key`].
    pub fn initialize(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Load the cart stored under `key`.
    ///
    /// Never fails. A missing value, an unreadable store and a value that
    /// does not decode all produce an empty cart; the latter two are logged
    /// and recorded in [`CartStore::diagnostic`]. A malformed value is left
    /// in storage until the next successful mutation replaces it.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (cart, diagnostic) = load(&storage, &key);
        Self {
            storage,
            key,
            cart,
            diagnostic,
        }
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total of the current cart.
    #[must_use]
    pub fn total(&self) -> Price {
        pricing::total(&self.cart)
    }

    /// Outcome of the initial load.
    #[must_use]
    pub const fn diagnostic(&self) -> &LoadDiagnostic {
        &self.diagnostic
    }

    /// Storage key this cart is mirrored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the cart store, returning the underlying store.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add one unit of a product already in the cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::ItemNotFound`] if the product has no line; nothing is
    ///   inserted or written.
    /// - [`CartError::InvalidCart`] if the quantity cannot grow further.
    /// - [`CartError::StorageUnavailable`] if the write fails; the cart is
    ///   left unchanged.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn increment(&mut self, id: ProductId) -> Result<LineChange> {
        let (next, change) = self.cart.incremented(id)?;
        if change == LineChange::Unchanged {
            debug!("Product not in cart, nothing to increment");
            return Err(CartError::ItemNotFound(id));
        }
        self.commit(next)?;
        debug!(?change, "Cart updated");
        Ok(change)
    }

    /// Remove one unit of a product, dropping its line at zero.
    ///
    /// A product with no line is a no-op that returns
    /// [`LineChange::Unchanged`] without writing.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StorageUnavailable`] if the write fails; the cart
    /// is left unchanged.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn decrement_or_remove(&mut self, id: ProductId) -> Result<LineChange> {
        let (next, change) = self.cart.decremented(id);
        if change == LineChange::Unchanged {
            debug!("Product not in cart, nothing to decrement");
            return Ok(change);
        }
        self.commit(next)?;
        debug!(?change, "Cart updated");
        Ok(change)
    }

    /// Replace the whole cart with `items`, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidCart`] for duplicate IDs or zero quantities.
    /// - [`CartError::StorageUnavailable`] if the write fails.
    #[instrument(skip(self, items), fields(key = %self.key, lines = items.len()))]
    pub fn replace(&mut self, items: Vec<LineItem>) -> Result<()> {
        let next = Cart::from_items(items)?;
        self.commit(next)?;
        info!("Cart replaced");
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StorageUnavailable`] if the write fails.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Cart::new())?;
        info!("Cart cleared");
        Ok(())
    }

    /// Persist `next`, then make it the current cart.
    fn commit(&mut self, next: Cart) -> Result<()> {
        let raw = codec::encode(&next)?;
        if let Err(e) = self.storage.set(&self.key, &raw) {
            warn!(error = %e, "Failed to persist cart, keeping previous state");
            return Err(e.into());
        }
        self.cart = next;
        Ok(())
    }
}

fn load<S: KeyValueStore>(storage: &S, key: &str) -> (Cart, LoadDiagnostic) {
    match storage.get(key) {
        Ok(None) => (Cart::new(), LoadDiagnostic::Absent),
        Ok(Some(raw)) if raw.trim().is_empty() => (Cart::new(), LoadDiagnostic::Absent),
        Ok(Some(raw)) => match codec::decode(&raw) {
            Ok(cart) => {
                let lines = cart.len();
                debug!(key, lines, "Loaded stored cart");
                (cart, LoadDiagnostic::Loaded { lines })
            }
            Err(e) => {
                warn!(key, error = %e, "Stored cart is malformed, starting empty");
                (Cart::new(), LoadDiagnostic::Malformed(e))
            }
        },
        Err(e) => {
            warn!(key, error = %e, "Cart storage unreadable, starting empty");
            (Cart::new(), LoadDiagnostic::Unavailable(e))
        }
    }
}
