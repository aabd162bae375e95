//! Report counters derived from store state.

use demo_shop_core::{Order, Review, WishlistEntry};

use crate::store::{CollectionKey, KeyValueStore, Store, StoreError};

/// Collection sizes shown in the reports panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportCounts {
    pub orders: usize,
    pub wishlist: usize,
    pub reviews: usize,
}

impl ReportCounts {
    /// Count every collection. Unreadable collections count as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn from_store<B: KeyValueStore>(store: &Store<B>) -> Result<Self, StoreError> {
        Ok(Self {
            orders: store.get::<Vec<Order>>(CollectionKey::Orders, Vec::new())?.len(),
            wishlist: store
                .get::<Vec<WishlistEntry>>(CollectionKey::Wishlist, Vec::new())?
                .len(),
            reviews: store.get::<Vec<Review>>(CollectionKey::Reviews, Vec::new())?.len(),
        })
    }
}
