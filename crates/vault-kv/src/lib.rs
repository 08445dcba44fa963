//! Type-safe key/value persistence for the TechVault storefront core.
//!
//! Provides a simple, ergonomic API for storing values under string keys
//! with automatic JSON serialization.
//!
//! # Example
//!
//! ```
//! use vault_kv::{KeyValueStore, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Settings {
//!     theme: String,
//! }
//!
//! let store = MemoryStore::new();
//!
//! // Store a value
//! store.set("settings", &Settings { theme: "dark".to_string() }).unwrap();
//!
//! // Retrieve a value
//! let settings: Option<Settings> = store.get("settings").unwrap();
//! assert!(settings.is_some());
//!
//! // Delete a value
//! store.delete("settings").unwrap();
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, MemoryStore, StoreError};
}
