//! Durable storage for the favorites list.
//!
//! # Modules
//!
//! - `backend`: key-value trait every backend implements
//! - `json`: one JSON file per key under the plugin data directory
//! - `memory`: process-local backend for startup, fallback and tests
//! - `favorites`: the ordered favorites list on top of a backend

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
