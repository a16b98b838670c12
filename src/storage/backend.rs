//! Storage backend abstraction.
//!
//! Durable storage is a plain key-value store holding whole JSON documents.
//! Callers read a whole value and write a whole value; there are no partial
//! updates and no transactions.

use crate::domain::error::Result;

/// Abstraction over durable key-value backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one JSON file per key
/// - [`MemoryStore`](crate::storage::MemoryStore): process memory only
///
/// # Examples
///
/// ```
/// use marquee::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("favorites", "[]")?;
/// assert_eq!(store.get("favorites")?.as_deref(), Some("[]"));
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Returns the stored value for `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
