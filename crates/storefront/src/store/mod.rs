//! Persisted key-value store.
//!
//! Two layers:
//!
//! - [`KeyValueStore`] - a raw string mapping, the `localStorage` equivalent.
//!   Backends: [`MemoryStore`] for tests and [`FileStore`] for the CLI.
//! - [`Store`] - typed JSON access on top of any backend. Reads report
//!   whether a key was [`Lookup::Found`], [`Lookup::Invalid`] or
//!   [`Lookup::Missing`], and [`Store::get`] applies a fallback for the last
//!   two.
//!
//! There are no cross-key transactions and no size limits; each `set`
//! replaces one key.

mod file;
mod memory;

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A persistent mapping of string keys to string values.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;

    /// Delete every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// The collections the storefront keeps in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Products,
    Orders,
    Wishlist,
    Reviews,
}

impl CollectionKey {
    /// Every collection, in seeding order.
    pub const ALL: [Self; 4] = [Self::Products, Self::Orders, Self::Wishlist, Self::Reviews];

    /// The storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Wishlist => "wishlist",
            Self::Reviews => "reviews",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CollectionKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Result of decoding a stored value.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The key held a value that decoded as `T`.
    Found(T),
    /// The key held content that is not a valid `T`.
    Invalid(serde_json::Error),
    /// The key is absent, empty, or holds `null`.
    Missing,
}

impl<T> Lookup<T> {
    /// The decoded value, or `fallback` when invalid or missing.
    pub fn or(self, fallback: T) -> T {
        match self {
            Self::Found(value) => value,
            Self::Invalid(_) | Self::Missing => fallback,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Typed JSON access over a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Store<B> {
    backend: B,
}

impl<B: KeyValueStore> Store<B> {
    /// Wrap a backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a reference to the backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Unwrap the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Decode the value under `key`, distinguishing invalid from missing.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend cannot be read.
    pub fn lookup<T: DeserializeOwned>(
        &self,
        key: impl AsRef<str>,
    ) -> Result<Lookup<T>, StoreError> {
        let Some(raw) = self.backend.get_item(key.as_ref())? else {
            return Ok(Lookup::Missing);
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Lookup::Missing);
        }

        Ok(match serde_json::from_str(trimmed) {
            Ok(value) => Lookup::Found(value),
            Err(e) => Lookup::Invalid(e),
        })
    }

    /// Decode the value under `key`, or return `fallback` if it is missing
    /// or does not decode.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend cannot be read.
    pub fn get<T: DeserializeOwned>(
        &self,
        key: impl AsRef<str>,
        fallback: T,
    ) -> Result<T, StoreError> {
        let key = key.as_ref();
        let lookup = self.lookup(key)?;
        if let Lookup::Invalid(e) = &lookup {
            tracing::warn!(key, error = %e, "Stored value did not decode, using fallback");
        }
        Ok(lookup.or(fallback))
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn set<T: Serialize + ?Sized>(
        &mut self,
        key: impl AsRef<str>,
        value: &T,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key.as_ref(), raw)
    }

    /// Delete the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Result<(), StoreError> {
        self.backend.remove_item(key.as_ref())
    }

    /// Delete every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.clear()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn store() -> Store<MemoryStore> {
        Store::new(MemoryStore::new())
    }

    #[test]
    fn test_set_then_get_returns_equal_value() {
        let mut store = store();
        let values = [
            json!(null),
            json!(true),
            json!(0),
            json!(-12.5),
            json!("text with \"quotes\""),
            json!([]),
            json!([1, "two", {"three": [3]}]),
            json!({"nested": {"list": [null, false]}}),
        ];

        for value in values {
            store.set("k", &value).unwrap();
            // `null` reads back as missing, so the fallback must equal it too.
            let read: Value = store.get("k", Value::Null).unwrap();
            assert_eq!(read, value);
        }
    }

    #[test]
    fn test_get_missing_returns_fallback() {
        let store = store();
        let read: Vec<i32> = store.get("absent", vec![7]).unwrap();
        assert_eq!(read, vec![7]);
    }

    #[test]
    fn test_lookup_distinguishes_invalid_from_missing() {
        let mut store = store();
        store.backend.set_item("broken", "{not json".to_string()).unwrap();
        store.backend.set_item("empty", String::new()).unwrap();
        store.backend.set_item("null", "null".to_string()).unwrap();

        assert!(store.lookup::<Value>("broken").unwrap().is_invalid());
        assert!(store.lookup::<Value>("empty").unwrap().is_missing());
        assert!(store.lookup::<Value>("null").unwrap().is_missing());
        assert!(store.lookup::<Value>("absent").unwrap().is_missing());
    }

    #[test]
    fn test_wrong_shape_is_invalid() {
        let mut store = store();
        store.set("orders", &json!({"not": "a list"})).unwrap();

        assert!(store.lookup::<Vec<Value>>("orders").unwrap().is_invalid());
        let read: Vec<Value> = store.get("orders", Vec::new()).unwrap();
        assert!(read.is_empty());
    }

    #[test]
    fn test_set_replaces_prior_value() {
        let mut store = store();
        store.set(CollectionKey::Reviews, &json!([1])).unwrap();
        store.set(CollectionKey::Reviews, &json!([2, 3])).unwrap();

        let read: Vec<i32> = store.get(CollectionKey::Reviews, Vec::new()).unwrap();
        assert_eq!(read, vec![2, 3]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = store();
        store.set("a", &1).unwrap();
        store.set("b", &2).unwrap();

        store.remove("a").unwrap();
        assert!(store.lookup::<i32>("a").unwrap().is_missing());
        assert!(store.lookup::<i32>("b").unwrap().is_found());

        store.clear().unwrap();
        assert!(store.lookup::<i32>("b").unwrap().is_missing());
    }

    #[test]
    fn test_collection_keys() {
        let keys: Vec<&str> = CollectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["products", "orders", "wishlist", "reviews"]);
    }
}
