//! Seed the cart from a file of line items.
//!
//! The file is a YAML (or JSON) list using the stored field names:
//!
//! ```yaml
//! - id: 1
//!   name: Ceramic mug
//!   price: 12000
//!   imageUrl: /images/mug.png
//!   quantity: 2
//! ```

use std::path::{Path, PathBuf};

use basket_cart::{CartError, CartStore, KeyValueStore};
use basket_core::LineItem;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a list of line items.
    #[error("Invalid seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The items were rejected by the store.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Replace the cart with the line items in `path`.
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read or parsed, if the items
/// break a cart rule, or if the cart cannot be saved.
pub fn from_file<S: KeyValueStore>(store: &mut CartStore<S>, path: &Path) -> Result<(), SeedError> {
    info!(path = %path.display(), "Loading line items from file");

    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse(&content).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = items.len();
    store.replace(items)?;
    info!(lines, "Cart seeded");
    Ok(())
}

fn parse(content: &str) -> Result<Vec<LineItem>, serde_yaml::Error> {
    serde_yaml::from_str(content)
}
