//! Markup renderers.
//!
//! Each section renderer is a pure function from one collection to the HTML
//! that fills its container (`#products-grid`, `#orders-body`,
//! `#wishlist-body`, `#reviews-list`), including the empty-state message.
//! Page renderers in [`pages`] wrap every section in a full document.
//!
//! Records are flattened into view structs with display-ready strings
//! before they reach a template. Askama escapes every interpolated value.

pub mod pages;

use askama::Template;
use chrono::{DateTime, Local, Utc};
use demo_shop_core::{Order, Product, Review, WishlistEntry};

use crate::error::Result;
use crate::reports::ReportCounts;
use crate::shop::{Clock, Shop};
use crate::store::KeyValueStore;

pub use pages::{PageState, View, render_page};

/// A re-renderable part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Products,
    Orders,
    Wishlist,
    Reviews,
    Reports,
}

impl Section {
    /// Id of the element the section's markup replaces.
    #[must_use]
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Products => "products-grid",
            Self::Orders => "orders-body",
            Self::Wishlist => "wishlist-body",
            Self::Reviews => "reviews-list",
            Self::Reports => "reports",
        }
    }
}

// =============================================================================
// View Types
// =============================================================================

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Order display data for templates.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub date: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            name: order.name.clone(),
            price: order.price.to_string(),
            date: format_local_datetime(order.date),
        }
    }
}

/// Wishlist display data for templates.
#[derive(Debug, Clone)]
pub struct WishlistView {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl From<&WishlistEntry> for WishlistView {
    fn from(entry: &WishlistEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            price: entry.price.to_string(),
        }
    }
}

/// Review display data for templates.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            name: review.name.clone(),
            rating: review.rating.get(),
            comment: review.comment.clone(),
        }
    }
}

/// Timestamp in the machine's local time zone, e.g. `10/18/2026, 9:30:00 AM`.
#[must_use]
pub fn format_local_datetime(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

fn views<'a, T: 'a, V: From<&'a T>>(items: &'a [T]) -> Vec<V> {
    items.iter().map(V::from).collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Product grid fragment.
#[derive(Template)]
#[template(path = "partials/products_grid.html")]
pub struct ProductsGridTemplate {
    pub products: Vec<ProductView>,
}

/// Orders table body fragment.
#[derive(Template)]
#[template(path = "partials/orders_rows.html")]
pub struct OrdersRowsTemplate {
    pub orders: Vec<OrderView>,
}

/// Wishlist table body fragment.
#[derive(Template)]
#[template(path = "partials/wishlist_rows.html")]
pub struct WishlistRowsTemplate {
    pub wishlist: Vec<WishlistView>,
}

/// Reviews list fragment.
#[derive(Template)]
#[template(path = "partials/reviews_list.html")]
pub struct ReviewsListTemplate {
    pub reviews: Vec<ReviewView>,
}

/// Report counters fragment.
#[derive(Template)]
#[template(path = "partials/reports.html")]
pub struct ReportsTemplate {
    pub reports: ReportCounts,
}

// =============================================================================
// Section Renderers
// =============================================================================

/// Render the product grid.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn products_grid(products: &[Product]) -> Result<String> {
    Ok(ProductsGridTemplate {
        products: views(products),
    }
    .render()?)
}

/// Render the orders table rows.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn orders_rows(orders: &[Order]) -> Result<String> {
    Ok(OrdersRowsTemplate {
        orders: views(orders),
    }
    .render()?)
}

/// Render the wishlist table rows.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn wishlist_rows(wishlist: &[WishlistEntry]) -> Result<String> {
    Ok(WishlistRowsTemplate {
        wishlist: views(wishlist),
    }
    .render()?)
}

/// Render the reviews list.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn reviews_list(reviews: &[Review]) -> Result<String> {
    Ok(ReviewsListTemplate {
        reviews: views(reviews),
    }
    .render()?)
}

/// Render the report counters.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn reports_panel(reports: ReportCounts) -> Result<String> {
    Ok(ReportsTemplate { reports }.render()?)
}

/// Render one section from the shop's current state.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the template fails.
pub fn render_section<B: KeyValueStore, C: Clock>(
    shop: &Shop<B, C>,
    section: Section,
) -> Result<String> {
    match section {
        Section::Products => products_grid(&shop.products()?),
        Section::Orders => orders_rows(&shop.orders()?),
        Section::Wishlist => wishlist_rows(&shop.wishlist()?),
        Section::Reviews => reviews_list(&shop.reviews()?),
        Section::Reports => reports_panel(shop.reports()?),
    }
}
