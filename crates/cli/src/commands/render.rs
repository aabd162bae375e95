//! Page rendering command.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use demo_shop_storefront::{PageState, ShopError, View, render_page};
use tracing::info;

use super::{CliError, open_shop};

/// Render `view` to `out`, or to stdout when `out` is `None`.
///
/// # Errors
///
/// Returns an error if the store cannot be read, the template fails, or the
/// output cannot be written.
pub fn page(path: &Path, view: View, out: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let shop = open_shop(path)?;
    let html = render_page(&shop, view, PageState::default()).inspect_err(ShopError::report)?;

    match out {
        Some(file) => {
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| output_error(file, source))?;
            }
            fs::write(file, &html).map_err(|source| output_error(file, source))?;
            info!(view = view.path(), out = %file.display(), bytes = html.len(), "Rendered page");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn output_error(path: &Path, source: io::Error) -> CliError {
    CliError::Output {
        path: path.to_path_buf(),
        source,
    }
}
