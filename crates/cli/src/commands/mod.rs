//! Command implementations.
//!
//! Each command opens the store file, seeds it, and works on one [`Shop`].

pub mod act;
pub mod list;
pub mod render;
pub mod seed;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use demo_shop_storefront::{FileStore, Shop, ShopError};
use thiserror::Error;

/// Errors raised by the CLI itself rather than the storefront.
#[derive(Debug, Error)]
pub enum CliError {
    /// A form submission failed validation.
    #[error("{0} field(s) failed validation")]
    Rejected(usize),

    /// Output could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Open the store at `path` and seed any missing collection.
///
/// # Errors
///
/// Returns an error if the store file is unreadable or cannot be written.
pub fn open_shop(path: &Path) -> Result<Shop<FileStore>, ShopError> {
    let store = FileStore::open(path)
        .map_err(ShopError::from)
        .inspect_err(ShopError::report)?;
    let mut shop = Shop::new(store);
    shop.seed().inspect_err(ShopError::report)?;
    Ok(shop)
}

/// Write `lines` to stdout, one per line.
///
/// # Errors
///
/// Returns an error if stdout is closed.
pub fn print_lines<I>(lines: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
