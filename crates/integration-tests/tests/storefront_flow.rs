//! End-to-end storefront flows against a file-backed store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::{TimeZone, Utc};
use demo_shop_core::ProductId;
use demo_shop_integration_tests::TempStore;
use demo_shop_storefront::render::{orders_rows, wishlist_rows};
use demo_shop_storefront::validate::{ReviewForm, fields};
use demo_shop_storefront::{
    Action, CollectionKey, FileStore, FixedClock, KeyValueStore, MemoryStore, PageState,
    ReportCounts, Section, Shop, View, dispatch, render_page, render_section,
};

fn click(shop: &mut Shop<FileStore>, kind: &str, id: &str) {
    let action = Action::from_button(kind, id).unwrap();
    dispatch(shop, action).unwrap();
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn test_seed_empty_store() {
    let temp = TempStore::new();
    let shop = temp.shop().unwrap();

    let products = shop.products().unwrap();
    let ids: Vec<i32> = products.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
    assert!(shop.orders().unwrap().is_empty());
    assert!(shop.wishlist().unwrap().is_empty());
    assert!(shop.reviews().unwrap().is_empty());
}

#[test]
fn test_seed_keeps_existing_data() {
    let temp = TempStore::new();
    {
        let mut shop = temp.shop().unwrap();
        click(&mut shop, "buy", "1");
    }

    let mut shop = Shop::new(temp.open().unwrap());
    let report = shop.seed().unwrap();

    assert!(report.is_noop());
    assert_eq!(shop.orders().unwrap().len(), 1);
}

#[test]
fn test_seed_replaces_corrupt_collection() {
    let temp = TempStore::new();
    let mut backend = temp.open().unwrap();
    backend.set_item("wishlist", "not json".to_string()).unwrap();

    let mut shop = Shop::new(backend);
    let report = shop.seed().unwrap();

    assert!(report.written.contains(&CollectionKey::Wishlist));
    assert!(shop.wishlist().unwrap().is_empty());
}

#[test]
fn test_seed_keeps_empty_catalog() {
    let mut backend = MemoryStore::new();
    backend.set_item("products", "[]".to_string()).unwrap();

    let mut shop = Shop::new(backend);
    shop.seed().unwrap();

    assert!(shop.products().unwrap().is_empty());
    let html = render_section(&shop, Section::Products).unwrap();
    assert!(html.contains("No products available."));
}

// =============================================================================
// Orders
// =============================================================================

#[test]
fn test_buy_records_product_snapshot() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();
    let before = shop.orders().unwrap().len();

    click(&mut shop, "buy", "3");

    let orders = shop.orders().unwrap();
    assert_eq!(orders.len(), before + 1);
    let order = orders.last().unwrap();
    assert_eq!(order.product_id, ProductId::new(3));
    assert_eq!(order.name, "Gaming Mouse");
    assert_eq!(order.price.amount.to_string(), "29.50");
}

#[test]
fn test_order_ids_unique_at_same_instant() {
    let instant = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let mut shop = Shop::with_clock(MemoryStore::new(), FixedClock(instant));
    shop.seed().unwrap();

    for _ in 0..3 {
        dispatch(&mut shop, Action::Buy(ProductId::new(5))).unwrap();
    }

    let mut ids: Vec<i64> = shop.orders().unwrap().iter().map(|o| o.id.get()).collect();
    let count = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), count);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_unknown_product_changes_nothing() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();

    assert!(dispatch(&mut shop, Action::Buy(ProductId::new(42))).is_err());
    assert!(dispatch(&mut shop, Action::AddToWishlist(ProductId::new(42))).is_err());
    assert_eq!(shop.reports().unwrap(), ReportCounts::default());
}

#[test]
fn test_orders_render_after_buy() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();
    click(&mut shop, "buy", "2");

    let html = orders_rows(&shop.orders().unwrap()).unwrap();
    assert!(html.contains("Smart Watch"));
    assert!(html.contains("$89.00"));
    assert!(!html.contains("No orders yet."));
}

// =============================================================================
// Wishlist
// =============================================================================

#[test]
fn test_wishlist_add_twice_keeps_one() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();

    click(&mut shop, "wish", "2");
    click(&mut shop, "wish", "2");

    let wishlist = shop.wishlist().unwrap();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].name, "Smart Watch");
}

#[test]
fn test_remove_last_wishlist_entry_shows_empty_state() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();
    click(&mut shop, "wish", "4");
    click(&mut shop, "remove", "4");

    let wishlist = shop.wishlist().unwrap();
    assert!(wishlist.is_empty());
    assert!(wishlist_rows(&wishlist).unwrap().contains("Your wishlist is empty."));
}

// =============================================================================
// Reviews and Reports
// =============================================================================

#[test]
fn test_invalid_rating_is_rejected() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();

    let outcome = dispatch(
        &mut shop,
        Action::SubmitReview(ReviewForm {
            name: "Ana".to_string(),
            rating: "6".to_string(),
            comment: "Great sound".to_string(),
        }),
    )
    .unwrap();

    assert!(outcome.errors.contains(fields::REV_RATING));
    assert!(shop.reviews().unwrap().is_empty());
}

#[test]
fn test_reports_track_every_collection() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();
    click(&mut shop, "buy", "1");
    click(&mut shop, "buy", "1");
    click(&mut shop, "wish", "5");
    dispatch(
        &mut shop,
        Action::SubmitReview(ReviewForm {
            name: "Bo".to_string(),
            rating: "3".to_string(),
            comment: "Does the job".to_string(),
        }),
    )
    .unwrap();

    let counts = shop.reports().unwrap();
    assert_eq!(
        counts,
        ReportCounts {
            orders: 2,
            wishlist: 1,
            reviews: 1,
        }
    );

    let html = render_page(&shop, View::Home, PageState::default()).unwrap();
    assert!(html.contains(r#"<span id="report-orders">2</span>"#));
    assert!(html.contains(r#"<span id="report-reviews">1</span>"#));
}

#[test]
fn test_reset_clears_activity() {
    let temp = TempStore::new();
    let mut shop = temp.shop().unwrap();
    click(&mut shop, "buy", "3");
    shop.reset().unwrap();

    let reopened = temp.shop().unwrap();
    assert_eq!(reopened.reports().unwrap(), ReportCounts::default());
    assert_eq!(reopened.products().unwrap().len(), 5);
}
