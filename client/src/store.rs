//! Local persistence layer
//!
//! The app persists three values: the user profile, the nutritional
//! goals override, and the favorited meals. They live behind a small
//! key-value capability so the medium (browser storage, disk, memory)
//! can change without touching call sites.
//!
//! Values are JSON strings. A stored value that no longer decodes is
//! treated as absent: the entry is deleted and the caller regenerates or
//! defaults it. Corruption is never fatal.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Keys for the values the app persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Profile,
    Goals,
    Favorites,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Profile => "profile",
            StoreKey::Goals => "goals",
            StoreKey::Favorites => "favorites",
        }
    }
}

/// Persistence error type
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Opaque key-value persistence capability
pub trait KeyValueStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;
    fn delete(&mut self, key: StoreKey) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: StoreKey) -> Result<(), StoreError> {
        self.entries.remove(&key);
        Ok(())
    }
}

/// File-backed store: one JSON file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&mut self, key: StoreKey) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Load and decode a stored JSON value
///
/// A value that fails to decode is discarded: the entry is deleted and
/// `None` returned.
pub(crate) fn load_json<T, S>(store: &mut S, key: StoreKey) -> Result<Option<T>, StoreError>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key = key.as_str(), "Discarding corrupt stored value: {}", e);
            store.delete(key)?;
            Ok(None)
        }
    }
}

/// Encode and store a JSON value
pub(crate) fn save_json<T, S>(store: &mut S, key: StoreKey, value: &T) -> Result<(), StoreError>
where
    T: serde::Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
