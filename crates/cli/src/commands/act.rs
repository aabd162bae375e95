//! Commands that dispatch a storefront action.

use std::path::Path;

use demo_shop_storefront::{
    Action, Clock, KeyValueStore, Outcome, Shop, ShopError, dispatch, render_section,
};
use tracing::{info, warn};

use super::{CliError, open_shop, print_lines};

/// Dispatch `action` against the store at `path` and report the outcome.
///
/// Rejected form fields are printed as `field: message` and turn into a
/// [`CliError::Rejected`] so the process exits non-zero. With `fragments`,
/// every section the action made stale is re-rendered and printed after the
/// notice.
///
/// # Errors
///
/// Returns an error if the action fails, or the form is rejected.
pub fn run(
    path: &Path,
    action: Action,
    fragments: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut shop = open_shop(path)?;
    let name = action.name();
    let outcome = dispatch(&mut shop, action).inspect_err(ShopError::report)?;

    if outcome.is_rejected() {
        for error in &outcome.errors {
            warn!(action = name, field = error.field, "{}", error.message);
        }
        print_lines(
            outcome
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message)),
        )?;
        return Err(CliError::Rejected(outcome.errors.len()).into());
    }

    if let Some(notice) = outcome.notice {
        print_lines([notice])?;
    }
    if fragments {
        print_lines(refreshed(&shop, &outcome).inspect_err(ShopError::report)?)?;
    }
    if let Some(view) = outcome.navigate {
        info!(action = name, next = view.path(), "Continue on next page");
    }
    if let Some(counts) = outcome.reports {
        info!(
            action = name,
            orders = counts.orders,
            wishlist = counts.wishlist,
            reviews = counts.reviews,
            "Store updated"
        );
    }
    Ok(())
}

/// Render each section in `outcome.refresh`, headed by a comment naming the
/// element it replaces.
fn refreshed<B: KeyValueStore, C: Clock>(
    shop: &Shop<B, C>,
    outcome: &Outcome,
) -> Result<Vec<String>, ShopError> {
    outcome
        .refresh
        .iter()
        .map(|&section| {
            let html = render_section(shop, section)?;
            Ok(format!("<!-- #{} -->\n{}", section.container_id(), html.trim_end()))
        })
        .collect()
}
