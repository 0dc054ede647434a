//! A single product's presence in a cart.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;
use super::price::Price;

/// One product line in a cart.
///
/// Field names on the wire are fixed (`id`, `name`, `price`, `imageUrl`,
/// `quantity`) so carts written by other clients decode unchanged. Any other
/// fields on a record are kept in [`LineItem::extra`] and written back as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line refers to; unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price of a single unit.
    pub price: Price,
    /// Opaque image reference, passed through untouched.
    pub image_url: String,
    /// Number of units, at least 1 while the line exists.
    pub quantity: u32,
    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Create a line item.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
            quantity,
            extra: Map::new(),
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
