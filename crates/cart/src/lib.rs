//! Basket cart library.
//!
//! Owns the authoritative cart for one view and mirrors every change to a
//! key-value store.
//!
//! # Modules
//!
//! - [`storage`] - Key-value persistence (`MemoryStore`, `FileStore`)
//! - [`codec`] - Wire encoding of carts with validation on decode
//! - [`store`] - `CartStore`, the write-through cart owner
//! - [`view`] - Display models for rendering a cart
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod codec;
pub mod config;
pub mod error;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{CartConfig, ConfigError, LogFormat};
pub use error::{CartError, Result};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{CartStore, DEFAULT_STORAGE_KEY, LoadDiagnostic};
pub use view::{CartView, EMPTY_CART_MESSAGE};
