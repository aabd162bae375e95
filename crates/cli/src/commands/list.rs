//! Read-only listing commands.
//!
//! Output is tab-separated, one record per line, so it pipes into `cut`
//! and friends. Empty collections print the same message the page shows.

use std::path::Path;

use demo_shop_storefront::render::format_local_datetime;

use super::{open_shop, print_lines};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// `id  name  price` for every catalog product.
pub fn products(path: &Path) -> CommandResult {
    let products = open_shop(path)?.products()?;
    if products.is_empty() {
        print_lines(["No products available."])?;
        return Ok(());
    }
    print_lines(
        products
            .iter()
            .map(|p| format!("{}\t{}\t{}", p.id, p.name, p.price)),
    )?;
    Ok(())
}

/// `order id  product id  name  price  date` for every order.
pub fn orders(path: &Path) -> CommandResult {
    let orders = open_shop(path)?.orders()?;
    if orders.is_empty() {
        print_lines(["No orders yet."])?;
        return Ok(());
    }
    print_lines(orders.iter().map(|o| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            o.id,
            o.product_id,
            o.name,
            o.price,
            format_local_datetime(o.date)
        )
    }))?;
    Ok(())
}

/// `id  name  price` for every wishlist entry.
pub fn wishlist(path: &Path) -> CommandResult {
    let wishlist = open_shop(path)?.wishlist()?;
    if wishlist.is_empty() {
        print_lines(["Your wishlist is empty."])?;
        return Ok(());
    }
    print_lines(
        wishlist
            .iter()
            .map(|w| format!("{}\t{}\t{}", w.id, w.name, w.price)),
    )?;
    Ok(())
}

/// `rating  name  comment` for every review, newest first.
pub fn reviews(path: &Path) -> CommandResult {
    let reviews = open_shop(path)?.reviews()?;
    if reviews.is_empty() {
        print_lines(["No reviews yet."])?;
        return Ok(());
    }
    print_lines(
        reviews
            .iter()
            .map(|r| format!("{}\t{}\t{}", r.rating, r.name, r.comment)),
    )?;
    Ok(())
}

/// The three report counters.
pub fn report(path: &Path) -> CommandResult {
    let counts = open_shop(path)?.reports()?;
    print_lines([
        format!("orders\t{}", counts.orders),
        format!("wishlist\t{}", counts.wishlist),
        format!("reviews\t{}", counts.reviews),
    ])?;
    Ok(())
}
