//! Persisted favorites list.
//!
//! The list is kept in memory, newest first, unique by id, and mirrored to a
//! [`KeyValueStore`] under [`FAVORITES_KEY`] after every change. The stored
//! value is a JSON array of summary objects in directory shape.

use crate::domain::error::{MarqueeError, Result};
use crate::domain::MovieSummary;
use crate::storage::backend::KeyValueStore;
use crate::storage::memory::MemoryStore;

/// Storage key holding the favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered favorites with write-through persistence.
///
/// Storage failures never surface to callers: a failed read starts from an
/// empty list and a failed write is logged while the in-memory change stays.
///
/// # Examples
///
/// ```
/// use marquee::domain::{MovieSummary, Poster};
/// use marquee::storage::{FavoritesStore, MemoryStore};
///
/// let mut favorites = FavoritesStore::load(Box::new(MemoryStore::default()));
/// let movie = MovieSummary {
///     id: "tt0848228".into(),
///     title: "The Avengers".into(),
///     year: "2012".into(),
///     poster: Poster::Missing,
///     kind: "movie".into(),
/// };
/// assert!(favorites.add(movie.clone()));
/// assert!(!favorites.add(movie));
/// assert_eq!(favorites.len(), 1);
/// ```
pub struct FavoritesStore {
    items: Vec<MovieSummary>,
    backend: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            backend: Box::new(MemoryStore::default()),
        }
    }
}

impl FavoritesStore {
    /// Reads the favorites list from `backend`.
    ///
    /// An absent key, an unreadable backend or a corrupt document all yield an
    /// empty list. Duplicate ids in the stored document are collapsed to
    /// their first occurrence.
    #[must_use]
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let _span = tracing::debug_span!("load_favorites").entered();

        let items = match backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match decode(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "stored favorites are corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::debug!("no stored favorites");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, starting empty");
                Vec::new()
            }
        };

        let mut deduped: Vec<MovieSummary> = Vec::with_capacity(items.len());
        for movie in items {
            if !deduped.iter().any(|m| m.same_title(&movie)) {
                deduped.push(movie);
            }
        }

        tracing::debug!(count = deduped.len(), "favorites loaded");
        Self {
            items: deduped,
            backend,
        }
    }

    /// Adds `movie` at the front of the list.
    ///
    /// Returns `false` without touching storage when a favorite with the same
    /// id already exists.
    pub fn add(&mut self, movie: MovieSummary) -> bool {
        if self.contains(&movie.id) {
            tracing::debug!(movie_id = %movie.id, "already a favorite");
            return false;
        }
        tracing::debug!(movie_id = %movie.id, title = %movie.title, "adding favorite");
        self.items.insert(0, movie);
        self.persist();
        true
    }

    /// Removes the favorite with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id != id);
        if self.items.len() == before {
            tracing::debug!(movie_id = %id, "not a favorite, nothing to remove");
            return false;
        }
        tracing::debug!(movie_id = %id, "removed favorite");
        self.persist();
        true
    }

    /// Adds `movie` if absent, removes it if present.
    ///
    /// Returns whether the movie is a favorite afterwards.
    pub fn toggle(&mut self, movie: &MovieSummary) -> bool {
        if self.remove(&movie.id) {
            false
        } else {
            self.add(movie.clone())
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|m| m.id == id)
    }

    /// Favorites, newest first.
    #[must_use]
    pub fn items(&self) -> &[MovieSummary] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&mut self) {
        let result = encode(&self.items).and_then(|raw| self.backend.set(FAVORITES_KEY, &raw));
        if let Err(e) = result {
            tracing::error!(error = %e, count = self.items.len(), "failed to save favorites");
        }
    }
}

fn decode(raw: &str) -> Result<Vec<MovieSummary>> {
    serde_json::from_str(raw).map_err(|e| MarqueeError::Storage(format!("corrupt favorites: {e}")))
}

fn encode(items: &[MovieSummary]) -> Result<String> {
    serde_json::to_string(items).map_err(|e| MarqueeError::Storage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Poster;
    use std::sync::{Arc, Mutex};

    fn movie(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: "2012".to_string(),
            poster: Poster::Missing,
            kind: "movie".to_string(),
        }
    }

    /// Backend that records every write and can be told to fail.
    #[derive(Clone, Default)]
    struct Recording {
        writes: Arc<Mutex<Vec<String>>>,
        initial: Option<String>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl KeyValueStore for Recording {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(MarqueeError::Storage("unreadable".into()));
            }
            Ok(self.initial.clone())
        }

        fn set(&mut self, _key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(MarqueeError::Storage("disk full".into()));
            }
            self.writes.lock().unwrap().push(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn add_prepends_and_persists_once() {
        let backend = Recording::default();
        let writes = Arc::clone(&backend.writes);
        let mut favorites = FavoritesStore::load(Box::new(backend));

        assert!(favorites.add(movie("tt1", "First")));
        assert!(favorites.add(movie("tt2", "Second")));
        assert!(!favorites.add(movie("tt1", "First")));

        let ids: Vec<&str> = favorites.items().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["tt2", "tt1"]);
        assert_eq!(writes.lock().unwrap().len(), 2);
    }

    #[test]
    fn remove_of_missing_id_does_not_write() {
        let backend = Recording::default();
        let writes = Arc::clone(&backend.writes);
        let mut favorites = FavoritesStore::load(Box::new(backend));

        assert!(!favorites.remove("tt404"));
        assert!(writes.lock().unwrap().is_empty());
    }

    #[test]
    fn remove_of_missing_id_keeps_populated_list_intact() {
        let backend = Recording::default();
        let writes = Arc::clone(&backend.writes);
        let mut favorites = FavoritesStore::load(Box::new(backend));
        favorites.add(movie("tt1", "First"));
        favorites.add(movie("tt2", "Second"));
        favorites.add(movie("tt3", "Third"));
        let before = favorites.items().to_vec();
        let writes_before = writes.lock().unwrap().len();

        assert!(!favorites.remove("tt404"));
        assert_eq!(favorites.items(), before.as_slice());
        let ids: Vec<&str> = favorites.items().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["tt3", "tt2", "tt1"]);
        assert_eq!(writes.lock().unwrap().len(), writes_before);
    }

    #[test]
    fn stored_document_matches_directory_shape() {
        let backend = Recording::default();
        let writes = Arc::clone(&backend.writes);
        let mut favorites = FavoritesStore::load(Box::new(backend));
        favorites.add(movie("tt0848228", "The Avengers"));

        let stored: serde_json::Value =
            serde_json::from_str(&writes.lock().unwrap()[0]).unwrap();
        assert_eq!(stored[0]["imdbID"], "tt0848228");
        assert_eq!(stored[0]["Title"], "The Avengers");
        assert_eq!(stored[0]["Poster"], "N/A");
    }

    #[test]
    fn corrupt_or_unreadable_storage_starts_empty() {
        let corrupt = Recording {
            initial: Some("{not json".into()),
            ..Recording::default()
        };
        assert!(FavoritesStore::load(Box::new(corrupt)).is_empty());

        let unreadable = Recording {
            fail_reads: true,
            ..Recording::default()
        };
        assert!(FavoritesStore::load(Box::new(unreadable)).is_empty());
    }

    #[test]
    fn duplicate_ids_in_storage_are_collapsed() {
        let stored = serde_json::to_string(&[movie("tt1", "A"), movie("tt1", "A again")]).unwrap();
        let favorites = FavoritesStore::load(Box::new(MemoryStore::with_value(FAVORITES_KEY, &stored)));
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.items()[0].title, "A");
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let backend = Recording {
            fail_writes: true,
            ..Recording::default()
        };
        let mut favorites = FavoritesStore::load(Box::new(backend));
        assert!(favorites.add(movie("tt1", "A")));
        assert!(favorites.contains("tt1"));
    }

    #[test]
    fn toggle_reports_resulting_membership() {
        let mut favorites = FavoritesStore::default();
        let avengers = movie("tt0848228", "The Avengers");
        assert!(favorites.toggle(&avengers));
        assert!(favorites.contains("tt0848228"));
        assert!(!favorites.toggle(&avengers));
        assert!(favorites.is_empty());
    }
}
