//! Demo Shop storefront library.
//!
//! A small storefront whose state lives in a local key-value store: a seeded
//! product catalog, orders, a wishlist, and reviews. The crate provides the
//! store abstraction, the typed actions a page can trigger, form validation,
//! and askama renderers for every section and page.
//!
//! ```rust,ignore
//! let mut shop = Shop::new(FileStore::open(".demo-shop/local-storage.json")?);
//! shop.seed()?;
//! let outcome = dispatch(&mut shop, Action::from_button("buy", "3")?)?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod config;
pub mod error;
pub mod filters;
pub mod render;
pub mod reports;
pub mod seed;
pub mod shop;
pub mod store;
pub mod validate;

pub use actions::{Action, Outcome, dispatch};
pub use config::ShopConfig;
pub use error::{Result, ShopError};
pub use render::{PageState, Section, View, render_page, render_section};
pub use reports::ReportCounts;
pub use shop::{Clock, FixedClock, Shop, SystemClock, WishlistAdd};
pub use store::{
    CollectionKey, FileStore, KeyValueStore, Lookup, MemoryStore, Store, StoreError,
};
