//! Key-value store wrapper with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A string-to-string store with local-storage semantics.
///
/// Writes replace the whole value; there is no coordination between two
/// handles on the same backing data (last writer wins).
pub trait Store: Send + Sync {
    /// Get the raw value for a key.
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Replace the raw value for a key.
    fn set_raw(&self, key: &str, value: String) -> Result<(), CacheError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// All keys currently stored.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get_raw(key)?.is_some())
    }
}

/// Volatile store, used in tests and for throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, CacheError> {
        self.entries
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }
}

impl Store for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// Store persisted as one JSON object in a file.
///
/// Every operation re-reads the file, so two processes sharing a path see
/// each other's writes; concurrent writers are not reconciled.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use `path` as the backing file. It is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CacheError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        tracing::trace!(path = %self.path.display(), keys = entries.len(), "store saved");
        Ok(())
    }
}

impl Store for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.load()?.remove(key))
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.save(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.load()?.into_keys().collect())
    }
}

/// Type-safe cache over a [`Store`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub struct Cache {
    store: Box<dyn Store>,
}

impl Cache {
    /// Wrap an existing store.
    pub fn with_store(store: impl Store + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Open a fresh in-memory cache.
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Open a cache backed by a JSON file.
    ///
    /// Fails if the file exists but is not a JSON object of strings.
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let store = FileStore::new(path);
        store
            .load()
            .map_err(|e| CacheError::OpenError(format!("{}: {}", store.path.display(), e)))?;
        Ok(Self::with_store(store))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist. A stored JSON `null` also
    /// reads as `None` when `T` is not itself optional.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_raw(key)? {
            Some(raw) => {
                let value: Option<T> = serde_json::from_str(&raw)?;
                Ok(value)
            }
            None => Ok(None),
        }
    }

    /// Get the raw JSON value, `None` if the key doesn't exist.
    pub fn get_json(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError> {
        self.store
            .get_raw(key)?
            .map(|raw| serde_json::from_str(&raw).map_err(CacheError::from))
            .transpose()
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_raw(key, raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}
