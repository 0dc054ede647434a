//! Core types for Basket.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod id;
pub mod line_item;
pub mod price;

pub use cart::{Cart, InvalidCart, LineChange};
pub use id::*;
pub use line_item::LineItem;
pub use price::{Price, PriceError};
