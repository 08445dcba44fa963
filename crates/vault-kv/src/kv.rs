//! Key/value store trait with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// A synchronous key/value store.
///
/// Backends implement the raw byte operations; typed `get`/`set` are
/// provided on top with JSON serialization, so any type that implements
/// `Serialize` and `DeserializeOwned` can be stored.
pub trait KeyValueStore {
    /// Get the raw bytes stored under a key.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store raw bytes under a key, replacing any existing value.
    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let cart: Option<Vec<LineItem>> = store.get("techvault_cart")?;
    /// ```
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    ///
    /// # Example
    ///
    /// ```ignore
    /// store.set("techvault_cart", &items)?;
    /// ```
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

impl<S: KeyValueStore> KeyValueStore for Arc<S> {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).set_raw(key, bytes)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }
}
