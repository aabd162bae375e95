//! The shop context: a store handle plus a clock.
//!
//! Every storefront operation goes through a [`Shop`] passed in explicitly,
//! so tests can run against a [`MemoryStore`](crate::store::MemoryStore)
//! and a fixed clock. Mutations are plain read-modify-write on one
//! collection; there is no locking.

use chrono::{DateTime, Utc};
use demo_shop_core::{Order, OrderId, Product, ProductId, Review, WishlistEntry};

use crate::error::{Result, ShopError, add_breadcrumb};
use crate::reports::ReportCounts;
use crate::seed::{self, SeedReport};
use crate::store::{CollectionKey, KeyValueStore, Store};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Result of adding a product to the wishlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistAdd {
    Added(WishlistEntry),
    /// The product was already wishlisted; nothing changed.
    AlreadyPresent,
}

/// Storefront state and operations.
#[derive(Debug, Clone)]
pub struct Shop<B, C = SystemClock> {
    store: Store<B>,
    clock: C,
}

impl<B: KeyValueStore> Shop<B> {
    /// A shop over `backend` using the system clock.
    pub const fn new(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<B: KeyValueStore, C: Clock> Shop<B, C> {
    /// A shop over `backend` using `clock` for order ids and dates.
    pub const fn with_clock(backend: B, clock: C) -> Self {
        Self {
            store: Store::new(backend),
            clock,
        }
    }

    /// Get a reference to the typed store.
    pub const fn store(&self) -> &Store<B> {
        &self.store
    }

    /// Unwrap the storage backend.
    pub fn into_backend(self) -> B {
        self.store.into_backend()
    }

    /// Current time according to the shop's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Ensure every collection exists. Run once per load.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn seed(&mut self) -> Result<SeedReport> {
        Ok(seed::seed(&mut self.store)?)
    }

    /// Delete everything and seed again.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset(&mut self) -> Result<SeedReport> {
        self.store.clear()?;
        tracing::info!("Cleared store");
        self.seed()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn products(&self) -> Result<Vec<Product>> {
        Ok(self.store.get(CollectionKey::Products, Vec::new())?)
    }

    /// Find a catalog product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn product(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.products()?.into_iter().find(|p| p.id == id))
    }

    /// Orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.store.get(CollectionKey::Orders, Vec::new())?)
    }

    /// Wishlist entries, in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn wishlist(&self) -> Result<Vec<WishlistEntry>> {
        Ok(self.store.get(CollectionKey::Wishlist, Vec::new())?)
    }

    /// Reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn reviews(&self) -> Result<Vec<Review>> {
        Ok(self.store.get(CollectionKey::Reviews, Vec::new())?)
    }

    /// Current report counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn reports(&self) -> Result<ReportCounts> {
        Ok(ReportCounts::from_store(&self.store)?)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Record a purchase of product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownProduct`] if `id` is not in the catalog,
    /// or a storage error.
    pub fn buy(&mut self, id: ProductId) -> Result<Order> {
        let product = self.require_product(id)?;
        let mut orders = self.orders()?;

        let now = self.clock.now();
        let order = Order::for_product(next_order_id(&orders, now), &product, now);
        orders.push(order.clone());
        self.store.set(CollectionKey::Orders, &orders)?;

        tracing::info!(order_id = %order.id, product_id = %id, "Order placed");
        add_breadcrumb(
            "orders",
            "Added to orders",
            Some(&[("product_id", id.to_string().as_str())]),
        );
        Ok(order)
    }

    /// Add product `id` to the wishlist unless it is already there.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownProduct`] if `id` is not in the catalog,
    /// or a storage error.
    pub fn add_to_wishlist(&mut self, id: ProductId) -> Result<WishlistAdd> {
        let product = self.require_product(id)?;
        let mut wishlist = self.wishlist()?;

        if wishlist.iter().any(|w| w.id == id) {
            tracing::debug!(product_id = %id, "Already wishlisted");
            return Ok(WishlistAdd::AlreadyPresent);
        }

        let entry = WishlistEntry::from(&product);
        wishlist.push(entry.clone());
        self.store.set(CollectionKey::Wishlist, &wishlist)?;

        tracing::info!(product_id = %id, "Added to wishlist");
        add_breadcrumb(
            "wishlist",
            "Added to wishlist",
            Some(&[("product_id", id.to_string().as_str())]),
        );
        Ok(WishlistAdd::Added(entry))
    }

    /// Remove wishlist entry `id`. Returns whether an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> Result<bool> {
        let mut wishlist = self.wishlist()?;
        let before = wishlist.len();
        wishlist.retain(|w| w.id != id);
        let removed = wishlist.len() != before;

        self.store.set(CollectionKey::Wishlist, &wishlist)?;

        tracing::info!(product_id = %id, removed, "Removed from wishlist");
        add_breadcrumb(
            "wishlist",
            "Removed from wishlist",
            Some(&[("product_id", id.to_string().as_str())]),
        );
        Ok(removed)
    }

    /// Prepend a validated review.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn add_review(&mut self, review: Review) -> Result<()> {
        let mut reviews = self.reviews()?;
        reviews.insert(0, review);
        self.store.set(CollectionKey::Reviews, &reviews)?;

        tracing::info!(reviews = reviews.len(), "Review added");
        add_breadcrumb("reviews", "Review submitted", None);
        Ok(())
    }

    fn require_product(&self, id: ProductId) -> Result<Product> {
        self.product(id)?.ok_or(ShopError::UnknownProduct(id))
    }
}

/// The creation time in milliseconds, bumped past every existing id so two
/// orders in the same millisecond still differ.
fn next_order_id(orders: &[Order], now: DateTime<Utc>) -> OrderId {
    let stamp = now.timestamp_millis();
    let next = orders
        .iter()
        .map(|o| o.id.get().saturating_add(1))
        .max()
        .map_or(stamp, |after_last| after_last.max(stamp));
    OrderId::new(next)
}
