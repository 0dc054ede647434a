//! Basket Core - Shared cart types.
//!
//! This crate provides the domain types used across all Basket components:
//! - `cart` - Cart store, persistence and presentation models
//! - `cli` - Command-line front end for viewing and editing a cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access. Every cart transition here returns a new value and leaves the
//! original untouched, which lets the store decide when a change is committed.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, line items and carts
//! - [`pricing`] - Cart total calculation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use types::*;
