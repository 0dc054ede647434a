//! Key-value persistence for carts.
//!
//! The cart is stored as one string value under one key, replaced whole on
//! every write. Two backends are provided:
//!
//! - [`MemoryStore`] - in-process map, used by tests and embedders
//! - [`FileStore`] - a JSON object file on local disk
//!
//! Neither backend locks or versions its values. When two writers share a
//! key, the last write wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium exists but its container format is unreadable.
    #[error("storage is corrupt: {0}")]
    Corrupt(String),

    /// The backend refused the operation.
    #[error("backend refused operation: {0}")]
    Unavailable(String),
}

/// A string-to-string store addressed by key.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Succeeds even if the key did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
