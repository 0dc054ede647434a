//! Cart totals.

use crate::types::{Cart, Price};

/// Sum of unit price times quantity over every line.
///
/// An empty cart totals [`Price::ZERO`]. No rounding or currency conversion
/// is applied.
#[must_use]
pub fn total(cart: &Cart) -> Price {
    cart.items()
        .iter()
        .map(crate::types::LineItem::line_total)
        .fold(Price::ZERO, Price::saturating_add)
}
