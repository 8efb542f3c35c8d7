//! Durable key/value storage for the persisted stores.
//!
//! A persisted store serializes its whole state as one JSON blob under a
//! fixed key after every mutation, and reads it back once at construction.
//! The backend is injected, so tests can run against [`MemoryStorage`]
//! while an application points [`JsonFileStorage`] at a state directory.
//!
//! Storage trouble is never fatal to a store: [`load_or`] and [`persist`]
//! log the problem and carry on, falling back to seed data on load.
//!
//! | Backend             | Blob location                 | Survives restart |
//! |---------------------|-------------------------------|------------------|
//! | [`MemoryStorage`]   | shared in-process map         | no (process-local) |
//! | [`JsonFileStorage`] | `<dir>/<key>.json`            | yes              |

mod error;

pub use error::StorageError;

use anyhow::{Result, bail};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs, io,
    path::PathBuf,
    sync::Arc,
};

/// A named-blob key/value backend.
///
/// Keys are short store names ("content", "preferences"); values are
/// opaque strings owned by the caller.
pub trait Storage {
    /// Read the blob stored under `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

// ============================================================================
// In-memory backend
// ============================================================================

/// In-process storage backed by a shared map.
///
/// Cloning yields another handle onto the same entries, so a test can keep
/// one handle, hand a clone to a store, and later construct a second store
/// from the surviving handle to simulate a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<FxHashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when no blob has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// ============================================================================
// File backend
// ============================================================================

/// File-per-key storage: the blob for `key` lives at `<dir>/<key>.json`.
///
/// The directory is created on first save. A missing file reads as `None`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a backend rooted at `dir`. The directory itself is only
    /// created once something is saved.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the blob path for `key`, rejecting keys that would escape
    /// the storage directory or collide with the `.json` suffix.
    fn blob_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            bail!(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(path, err).into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::Io(self.dir.clone(), err))?;
        fs::write(&path, value).map_err(|err| StorageError::Io(path, err))?;
        Ok(())
    }
}

// ============================================================================
// Store-side helpers
// ============================================================================

/// Rehydrate a store's state from `storage`, falling back to `seed`.
///
/// Any failure - backend error, missing blob, or a blob that no longer
/// deserializes - resolves to `seed`. Failures are logged, never raised.
pub(crate) fn load_or<T: DeserializeOwned>(storage: &dyn Storage, key: &str, seed: T) -> T {
    match storage.load(key) {
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(state) => state,
            Err(err) => {
                crate::log!(key; "discarding unreadable snapshot: {err}");
                seed
            }
        },
        Ok(None) => seed,
        Err(err) => {
            crate::log!(key; "load failed, using seed data: {err:#}");
            seed
        }
    }
}

/// Serialize `state` and write it under `key`, logging on failure.
pub(crate) fn persist<T: Serialize>(storage: &mut dyn Storage, key: &str, state: &T) {
    match serde_json::to_string(state) {
        Ok(blob) => {
            if let Err(err) = storage.save(key, &blob) {
                crate::log!(key; "save failed: {err:#}");
            }
        }
        Err(err) => crate::log!(key; "state serialization failed: {err}"),
    }
}
