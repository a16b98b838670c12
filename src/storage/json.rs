//! JSON file-based key-value backend.
//!
//! Each key lives in its own file, `{dir}/{key}.json`. Writes go to a
//! temporary sibling first and are renamed into place, so a crash never
//! leaves a half-written document behind.

use crate::domain::error::{MarqueeError, Result};
use crate::storage::backend::KeyValueStore;
use std::path::{Path, PathBuf};

/// Directory of JSON documents, one per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates, if needed) the store directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tracing::debug!(path = ?dir, "opening JSON file store");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(MarqueeError::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::trace!(path = ?path, bytes = contents.len(), "read stored value");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!(path = ?path, bytes = value.len(), "stored value saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn written_value_reads_back_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested")).unwrap();
        store.set("favorites", r#"[{"imdbID":"tt1"}]"#).unwrap();
        store.set("favorites", "[]").unwrap();

        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));
        assert!(store.dir().join("favorites.json").exists());
        assert!(!store.dir().join("favorites.json.tmp").exists());
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.set("../outside", "x"),
            Err(MarqueeError::Storage(_))
        ));
        assert!(store.get("").is_err());
    }
}
