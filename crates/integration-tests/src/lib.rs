//! Integration tests for Demo Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p demo-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `file_store` - Persistence across reopen, corrupt files
//! - `storefront_flow` - Seeding, buying, wishlist and reviews end to end
//! - `forms` - Login and registration through the action dispatcher
//!
//! Tests that touch disk use [`TempStore`], which puts each store file in
//! its own directory under the system temp dir and deletes it on drop.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use demo_shop_storefront::{FileStore, Shop, StoreError};

/// A store file in a fresh temporary directory.
#[derive(Debug)]
pub struct TempStore {
    dir: PathBuf,
    path: PathBuf,
}

impl TempStore {
    /// Reserve a unique directory. Nothing is created until the store is
    /// first written.
    #[must_use]
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("demo-shop-{}", uuid::Uuid::new_v4()));
        let path = dir.join("local-storage.json");
        Self { dir, path }
    }

    /// Path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(&self) -> Result<FileStore, StoreError> {
        FileStore::open(&self.path)
    }

    /// Open a seeded shop over the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn shop(&self) -> demo_shop_storefront::Result<Shop<FileStore>> {
        let mut shop = Shop::new(self.open()?);
        shop.seed()?;
        Ok(shop)
    }
}

impl Default for TempStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
