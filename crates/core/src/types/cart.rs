//! The cart: an ordered list of line items keyed by product.
//!
//! A [`Cart`] upholds two rules at all times:
//!
//! - every line has a quantity of at least 1
//! - no two lines share a product ID
//!
//! Both are checked on construction and preserved by every transition. The
//! transition methods are pure: they return the next cart and leave `self`
//! as it was, so a caller can persist the result before committing to it.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::line_item::LineItem;

/// Reasons a list of line items cannot form a cart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCart {
    /// Two lines reference the same product.
    #[error("duplicate line for product {0}")]
    DuplicateId(ProductId),
    /// A line has a quantity of zero.
    #[error("line for product {0} has zero quantity")]
    ZeroQuantity(ProductId),
    /// Incrementing would exceed the largest representable quantity.
    #[error("quantity for product {0} cannot grow any further")]
    QuantityOverflow(ProductId),
}

/// What a transition did to the targeted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// Quantity went up; holds the new quantity.
    Incremented(u32),
    /// Quantity went down; holds the new quantity.
    Decremented(u32),
    /// The line was dropped from the cart.
    Removed,
    /// No line matched the product ID.
    Unchanged,
}

/// An ordered collection of line items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from line items, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCart`] if any product appears twice or any line has a
    /// zero quantity.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, InvalidCart> {
        let mut seen = std::collections::HashSet::with_capacity(items.len());
        for item in &items {
            if item.quantity == 0 {
                return Err(InvalidCart::ZeroQuantity(item.id));
            }
            if !seen.insert(item.id) {
                return Err(InvalidCart::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consume the cart, returning its line items.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the cart has a line for a product.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// The cart with one more unit of `id`.
    ///
    /// An unknown ID yields an identical cart and [`LineChange::Unchanged`];
    /// this never inserts a new line.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCart::QuantityOverflow`] if the line is already at
    /// `u32::MAX`.
    pub fn incremented(&self, id: ProductId) -> Result<(Self, LineChange), InvalidCart> {
        let Some(current) = self.get(id) else {
            return Ok((self.clone(), LineChange::Unchanged));
        };
        let quantity = current
            .quantity
            .checked_add(1)
            .ok_or(InvalidCart::QuantityOverflow(id))?;

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    LineItem {
                        quantity,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Ok((Self { items }, LineChange::Incremented(quantity)))
    }

    /// The cart with one fewer unit of `id`, dropping the line at zero.
    ///
    /// An unknown ID yields an identical cart and [`LineChange::Unchanged`].
    #[must_use]
    pub fn decremented(&self, id: ProductId) -> (Self, LineChange) {
        match self.get(id).map(|item| item.quantity) {
            None => (self.clone(), LineChange::Unchanged),
            Some(quantity) if quantity > 1 => {
                let items = self
                    .items
                    .iter()
                    .map(|item| {
                        if item.id == id {
                            LineItem {
                                quantity: quantity - 1,
                                ..item.clone()
                            }
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                (Self { items }, LineChange::Decremented(quantity - 1))
            }
            Some(_) => {
                let items = self
                    .items
                    .iter()
                    .filter(|item| item.id != id)
                    .cloned()
                    .collect();
                (Self { items }, LineChange::Removed)
            }
        }
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = InvalidCart;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::Price;

    fn item(id: i64, price: u64, quantity: u32) -> LineItem {
        LineItem::new(
            ProductId::new(id),
            format!("Product {id}"),
            Price::from_units(price),
            format!("/img/{id}.png"),
            quantity,
        )
    }

    fn ids(cart: &Cart) -> Vec<i64> {
        cart.items().iter().map(|item| item.id.as_i64()).collect()
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let result = Cart::from_items(vec![item(1, 100, 1), item(1, 100, 2)]);
        assert_eq!(result, Err(InvalidCart::DuplicateId(ProductId::new(1))));
    }

    #[test]
    fn test_from_items_rejects_zero_quantity() {
        let result = Cart::from_items(vec![item(1, 100, 1), item(2, 100, 0)]);
        assert_eq!(result, Err(InvalidCart::ZeroQuantity(ProductId::new(2))));
    }

    #[test]
    fn test_increment_preserves_order() {
        let cart = Cart::from_items(vec![item(1, 500, 1), item(2, 2000, 1), item(3, 10, 4)]).unwrap();
        let (next, change) = cart.incremented(ProductId::new(2)).unwrap();

        assert_eq!(change, LineChange::Incremented(2));
        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(next.items()[1].quantity, 2);
        assert_eq!(next.items()[0], cart.items()[0]);
        assert_eq!(next.items()[2], cart.items()[2]);
        // Original untouched
        assert_eq!(cart.items()[1].quantity, 1);
    }

    #[test]
    fn test_increment_unknown_id_never_inserts() {
        let cart = Cart::from_items(vec![item(1, 500, 1)]).unwrap();
        let (next, change) = cart.incremented(ProductId::new(99)).unwrap();
        assert_eq!(change, LineChange::Unchanged);
        assert_eq!(next, cart);
    }

    #[test]
    fn test_increment_overflow() {
        let cart = Cart::from_items(vec![item(1, 1, u32::MAX)]).unwrap();
        assert_eq!(
            cart.incremented(ProductId::new(1)),
            Err(InvalidCart::QuantityOverflow(ProductId::new(1)))
        );
    }

    #[test]
    fn test_decrement_above_one() {
        let cart = Cart::from_items(vec![item(1, 1000, 2)]).unwrap();
        let (next, change) = cart.decremented(ProductId::new(1));
        assert_eq!(change, LineChange::Decremented(1));
        assert_eq!(next.items()[0].quantity, 1);
    }

    #[test]
    fn test_decrement_at_one_removes_and_keeps_order() {
        let cart = Cart::from_items(vec![item(1, 1, 3), item(2, 1, 1), item(3, 1, 2)]).unwrap();
        let (next, change) = cart.decremented(ProductId::new(2));
        assert_eq!(change, LineChange::Removed);
        assert_eq!(ids(&next), vec![1, 3]);
        assert_eq!(next.items()[0], cart.items()[0]);
        assert_eq!(next.items()[1], cart.items()[2]);
    }

    #[test]
    fn test_decrement_unknown_id() {
        let cart = Cart::from_items(vec![item(1, 1, 1)]).unwrap();
        let (next, change) = cart.decremented(ProductId::new(5));
        assert_eq!(change, LineChange::Unchanged);
        assert_eq!(next, cart);
    }

    #[test]
    fn test_item_count() {
        let cart = Cart::from_items(vec![item(1, 1, 3), item(2, 1, 2)]).unwrap();
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
        assert_eq!(Cart::new().item_count(), 0);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"id":1,"name":"A","price":1,"imageUrl":"","quantity":1},
            {"id":1,"name":"B","price":1,"imageUrl":"","quantity":1}
        ]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }
}
