//! Seed and reset commands.
//!
//! # Usage
//!
//! ```bash
//! # Create any missing collection (idempotent)
//! shop seed
//!
//! # Wipe orders, wishlist and reviews and restore the catalog
//! shop reset
//! ```

use std::path::Path;

use demo_shop_storefront::{FileStore, Shop, ShopError, StoreError};
use tracing::{info, warn};

/// Seed the store at `path`, reporting which collections were written.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn seed(path: &Path) -> Result<(), ShopError> {
    let store = FileStore::open(path)?;
    let report = Shop::new(store).seed().inspect_err(ShopError::report)?;

    if report.is_noop() {
        info!(path = %path.display(), "Store already seeded");
    } else {
        for key in &report.written {
            info!(collection = %key, "Initialized collection");
        }
    }
    Ok(())
}

/// Clear the store at `path` and seed it again. A store file that no
/// longer parses is discarded.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn reset(path: &Path) -> Result<(), ShopError> {
    let store = match FileStore::open(path) {
        Err(StoreError::Corrupt { source, .. }) => {
            warn!(path = %path.display(), error = %source, "Discarding unreadable store file");
            std::fs::remove_file(path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
            FileStore::open(path)?
        }
        other => other?,
    };
    Shop::new(store).reset().inspect_err(ShopError::report)?;

    info!(path = %path.display(), "Store reset to defaults");
    Ok(())
}
