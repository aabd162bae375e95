//! Records persisted in the local store.
//!
//! Field names are camelCase in JSON (`productId`) so stored collections keep
//! the shape the storefront has always written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, Price, ProductId, Rating};

/// A catalog product. Seed data, never mutated by actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image URL.
    #[serde(alias = "img")]
    pub image: String,
}

/// A purchase, with name and price copied from the product at buy time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Not checked against the catalog; may dangle if the catalog changes.
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub date: DateTime<Utc>,
}

impl Order {
    /// Snapshot `product` into a new order.
    #[must_use]
    pub fn for_product(id: OrderId, product: &Product, date: DateTime<Utc>) -> Self {
        Self {
            id,
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            date,
        }
    }
}

/// A wishlisted product. `id` is the product id and is unique in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl From<&Product> for WishlistEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: Rating,
    pub comment: String,
}
