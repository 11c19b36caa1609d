//! Durable key-value storage.
//!
//! The cart is mirrored into a small string-to-string store, the same shape a
//! browser's `localStorage` has. Two backends are provided:
//!
//! - [`MemoryStore`] - process-local, used by tests and throwaway sessions
//! - [`FileStore`] - a single JSON object on disk, rewritten on every write
//!
//! Reads and writes are synchronous; callers rely on a write having reached
//! the backend by the time `set` returns.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refused the write.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A synchronous string key-value store.
pub trait KeyValueStore {
    /// Retrieve a value by key. Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Succeeds even if the key did not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// In-memory backend
// =============================================================================

/// Process-local store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }

    /// Borrow a raw value without going through the trait.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File backend
// =============================================================================

/// Store persisted as one JSON object file.
///
/// The whole file is rewritten on every `set`/`remove` through a sibling
/// temporary file and a rename, so a crash mid-write leaves the previous
/// contents intact. A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`. The file is created lazily on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt { .. }) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("pixalara-storage-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.peek("k"), Some("v2"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = FileStore::new(temp_path());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = temp_path();
        let mut store = FileStore::new(&path);
        store.set("pixalara_cart", "[]").unwrap();
        store.set("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("pixalara_cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_remove() {
        let path = temp_path();
        let mut store = FileStore::new(&path);
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        store.remove("never-set").unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_corrupt_read_and_recovering_write() {
        let path = temp_path();
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.get("a"),
            Err(StorageError::Corrupt { .. })
        ));

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("pixalara-dir-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("store.json");
        let mut store = FileStore::new(&path);
        store.set("a", "1").unwrap();
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
