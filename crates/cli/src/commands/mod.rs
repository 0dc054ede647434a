//! CLI command implementations.

pub mod cart;
pub mod seed;

use std::io::{self, Write};

use basket_cart::{CartStore, CartView, KeyValueStore};

/// Print the cart to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn render<S: KeyValueStore>(store: &CartStore<S>, currency_suffix: &str) -> io::Result<()> {
    let view = CartView::new(store.cart(), currency_suffix);
    let mut out = io::stdout().lock();
    write!(out, "{view}")?;
    out.flush()
}
