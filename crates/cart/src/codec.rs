//! Wire encoding for stored carts.
//!
//! A cart is stored as a JSON array of line records:
//!
//! ```json
//! [{"id": 1, "name": "Mug", "price": 1000, "imageUrl": "/mug.png", "quantity": 2}]
//! ```
//!
//! Decoding validates the whole value before a [`Cart`] is produced: the
//! record shape, non-negative prices, positive quantities and unique IDs.
//! Fields a record carries beyond these are kept and encoded back unchanged.

use basket_core::{Cart, InvalidCart, LineItem};
use thiserror::Error;

/// Reasons a stored value does not decode to a cart.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value is not a JSON array of line records.
    #[error("not a list of cart lines: {0}")]
    Shape(#[from] serde_json::Error),

    /// The records decode but break a cart rule.
    #[error("{0}")]
    Invalid(#[from] InvalidCart),
}

/// Encode a cart for storage.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn encode(cart: &Cart) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart.items())
}

/// Decode a stored value into a cart.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for anything that is not a list of line
/// records and [`CodecError::Invalid`] for duplicate IDs or zero quantities.
pub fn decode(raw: &str) -> Result<Cart, CodecError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;
    Ok(Cart::from_items(items)?)
}
