//! Default data for a fresh store.
//!
//! Seeding runs on every load and only writes what is missing: the catalog
//! when `products` is not a JSON list, and an empty list for each other
//! collection that is absent, unparsable, or not a list. A list whose records
//! do not match the current schema is left alone.

use demo_shop_core::{Order, Price, Product, ProductId, Review, WishlistEntry};
use serde::Serialize;
use serde_json::Value;

use crate::store::{CollectionKey, KeyValueStore, Lookup, Store, StoreError};

const CATALOG: [(i32, &str, i64, &str); 5] = [
    (
        1,
        "Wireless Headphones",
        4999,
        "https://images.unsplash.com/photo-1518444028784-5ce93ae3a6d0?q=80&w=800&auto=format&fit=crop",
    ),
    (
        2,
        "Smart Watch",
        8900,
        "https://images.unsplash.com/photo-1516559828984-fb3b99548b21?q=80&w=800&auto=format&fit=crop",
    ),
    (
        3,
        "Gaming Mouse",
        2950,
        "https://images.unsplash.com/photo-1541534401786-2077eed87a72?q=80&w=800&auto=format&fit=crop",
    ),
    (
        4,
        "Bluetooth Speaker",
        3925,
        "https://images.unsplash.com/photo-1495305379050-64540d6ee95d?q=80&w=800&auto=format&fit=crop",
    ),
    (
        5,
        "USB-C Charger",
        1999,
        "https://images.unsplash.com/photo-1591019479261-1b1b1b1a1a1a?q=80&w=800&auto=format&fit=crop",
    ),
];

/// The five-product demo catalog.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    CATALOG
        .iter()
        .map(|&(id, name, cents, image)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents),
            image: image.to_string(),
        })
        .collect()
}

/// What a seeding pass wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Collections that were (re)initialized.
    pub written: Vec<CollectionKey>,
}

impl SeedReport {
    /// True when the store already held every collection.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

/// Ensure every collection exists.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn seed<B: KeyValueStore>(store: &mut Store<B>) -> Result<SeedReport, StoreError> {
    let mut report = SeedReport::default();

    if ensure(store, CollectionKey::Products, default_catalog)? {
        report.written.push(CollectionKey::Products);
    }
    if ensure(store, CollectionKey::Orders, Vec::<Order>::new)? {
        report.written.push(CollectionKey::Orders);
    }
    if ensure(store, CollectionKey::Wishlist, Vec::<WishlistEntry>::new)? {
        report.written.push(CollectionKey::Wishlist);
    }
    if ensure(store, CollectionKey::Reviews, Vec::<Review>::new)? {
        report.written.push(CollectionKey::Reviews);
    }

    if report.is_noop() {
        tracing::debug!("Store already seeded");
    } else {
        tracing::info!(written = ?report.written, "Seeded store");
    }
    Ok(report)
}

/// Write `default()` under `key` unless it already holds a JSON list.
/// Returns whether anything was written.
fn ensure<B, T>(
    store: &mut Store<B>,
    key: CollectionKey,
    default: impl FnOnce() -> Vec<T>,
) -> Result<bool, StoreError>
where
    B: KeyValueStore,
    T: Serialize,
{
    match store.lookup::<Value>(key)? {
        Lookup::Found(Value::Array(_)) => return Ok(false),
        Lookup::Found(other) => {
            tracing::warn!(
                %key,
                kind = json_kind(&other),
                "Replacing collection that is not a list"
            );
        }
        Lookup::Invalid(e) => {
            tracing::warn!(%key, error = %e, "Replacing unparsable collection");
        }
        Lookup::Missing => {}
    }
    store.set(key, &default())?;
    Ok(true)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_seed_empty_store() {
        let mut store = Store::new(MemoryStore::new());
        let report = seed(&mut store).unwrap();

        assert_eq!(report.written, CollectionKey::ALL.to_vec());

        let products: Vec<Product> = store.get(CollectionKey::Products, Vec::new()).unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);

        for key in [
            CollectionKey::Orders,
            CollectionKey::Wishlist,
            CollectionKey::Reviews,
        ] {
            let items: Vec<serde_json::Value> = store.get(key, vec![json!(0)]).unwrap();
            assert!(items.is_empty(), "{key} should be empty");
        }
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut store = Store::new(MemoryStore::new());
        seed(&mut store).unwrap();
        let second = seed(&mut store).unwrap();
        assert!(second.is_noop());
    }

    #[test]
    fn test_seed_keeps_existing_data() {
        let mut store = Store::new(MemoryStore::new());
        store
            .set(
                CollectionKey::Reviews,
                &json!([{"name": "Ana", "rating": 5, "comment": "Lovely"}]),
            )
            .unwrap();
        store.set(CollectionKey::Products, &json!([])).unwrap();

        let report = seed(&mut store).unwrap();
        assert_eq!(
            report.written,
            vec![CollectionKey::Orders, CollectionKey::Wishlist]
        );

        let reviews: Vec<Review> = store.get(CollectionKey::Reviews, Vec::new()).unwrap();
        assert_eq!(reviews.len(), 1);
        // An empty catalog is still a catalog.
        let products: Vec<Product> = store.get(CollectionKey::Products, Vec::new()).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_seed_replaces_unparsable_collection() {
        let mut backend = MemoryStore::new();
        backend.set_item("orders", "[{".to_string()).unwrap();
        let mut store = Store::new(backend);

        let report = seed(&mut store).unwrap();
        assert!(report.written.contains(&CollectionKey::Orders));

        let orders = store.lookup::<Vec<Order>>(CollectionKey::Orders).unwrap();
        assert!(matches!(orders, Lookup::Found(list) if list.is_empty()));
    }

    #[test]
    fn test_seed_replaces_non_list_collection() {
        let mut store = Store::new(MemoryStore::new());
        store.set(CollectionKey::Orders, &json!({"oops": true})).unwrap();
        store.set(CollectionKey::Products, &json!("garbage")).unwrap();

        let report = seed(&mut store).unwrap();
        assert!(report.written.contains(&CollectionKey::Orders));
        assert!(report.written.contains(&CollectionKey::Products));

        let products: Vec<Product> = store.get(CollectionKey::Products, Vec::new()).unwrap();
        assert_eq!(products.len(), 5);
    }

    #[test]
    fn test_seed_keeps_list_with_mismatched_records() {
        // The second review's rating is not a whole number.
        let raw = r#"[{"name":"Ana","rating":5,"comment":"Lovely"},{"name":"Bo","rating":4.5,"comment":"Fine"}]"#;
        let mut backend = MemoryStore::new();
        backend.set_item("reviews", raw.to_string()).unwrap();
        let mut store = Store::new(backend);

        assert!(store.lookup::<Vec<Review>>(CollectionKey::Reviews).unwrap().is_invalid());

        let report = seed(&mut store).unwrap();
        assert!(!report.written.contains(&CollectionKey::Reviews));
        assert_eq!(
            store.backend().get_item("reviews").unwrap().as_deref(),
            Some(raw)
        );
    }

    #[test]
    fn test_default_catalog_prices() {
        let catalog = default_catalog();
        let mouse = catalog.iter().find(|p| p.id == ProductId::new(3)).unwrap();
        assert_eq!(mouse.name, "Gaming Mouse");
        assert_eq!(mouse.price.to_string(), "$29.50");
    }
}
