//! Unified error handling for cart operations.
//!
//! None of these errors are fatal. Load failures never reach the caller at
//! all (the store starts empty and records a diagnostic); mutation failures
//! leave the in-memory cart exactly as it was.

use basket_core::{InvalidCart, ProductId};
use thiserror::Error;

use crate::codec::CodecError;
use crate::storage::StorageError;

/// Error type for cart store operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The key-value store could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// A stored or supplied cart does not have the expected shape.
    #[error("malformed cart data: {0}")]
    MalformedStoredData(#[from] CodecError),

    /// The product has no line in the cart.
    #[error("product {0} is not in the cart")]
    ItemNotFound(ProductId),

    /// The requested change would break a cart rule.
    #[error("invalid cart: {0}")]
    InvalidCart(#[from] InvalidCart),

    /// The cart could not be serialized.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
