//! Display models for rendering a cart.
//!
//! Views are plain data with prices already formatted. Rendering a view with
//! `Display` produces the text the CLI prints; an empty cart renders as
//! [`EMPTY_CART_MESSAGE`].

use core::fmt;

use basket_core::{Cart, LineItem, Price, ProductId, pricing};

/// Shown in place of the item list when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "cart is empty";

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Build the view for `cart`, appending `suffix` to every price.
    #[must_use]
    pub fn new(cart: &Cart, suffix: &str) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|line| CartItemView::new(line, suffix))
                .collect(),
            subtotal: format_price(pricing::total(cart), suffix),
            item_count: cart.item_count(),
        }
    }

    /// Whether there is anything to list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItemView {
    fn new(line: &LineItem, suffix: &str) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            image_url: line.image_url.clone(),
            quantity: line.quantity,
            price: format_price(line.price, suffix),
            line_price: format_price(line.line_total(), suffix),
        }
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{EMPTY_CART_MESSAGE}");
        }
        for item in &self.items {
            writeln!(
                f,
                "[{}] {}  {} x {} = {}",
                item.id, item.name, item.price, item.quantity, item.line_price
            )?;
            if !item.image_url.is_empty() {
                writeln!(f, "    image: {}", item.image_url)?;
            }
        }
        writeln!(f, "items: {}", self.item_count)?;
        writeln!(f, "total: {}", self.subtotal)
    }
}

// =============================================================================
// Price Formatting
// =============================================================================

/// Format a price with thousands separators, e.g. `12,500원`.
#[must_use]
pub fn format_price(price: Price, suffix: &str) -> String {
    let text = price.to_string();
    match text.split_once('.') {
        Some((whole, fraction)) => format!("{}.{fraction}{suffix}", group_thousands(whole)),
        None => format!("{}{suffix}", group_thousands(&text)),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
