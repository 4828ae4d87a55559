//! # Durable storage
//!
//! Plain string key/value storage that survives restarts: browser local
//! storage in the web client, a JSON file for the CLI. Stored values are
//! trusted as-is and read leniently.

use crate::models::FavoriteEntry;
use serde_json::Value;
use std::{cell::RefCell, collections::HashMap};
use thiserror::Error;
use tracing::warn;

/// Key holding the serialized favorites array.
pub const FAVORITES_KEY: &str = "starWarsLikes";
/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Failure to write durable storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage backend rejected the write: {message}")]
    Backend { message: String },

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key/value storage.
pub trait DurableStorage {
    /// Raw value stored under `key`.
    fn read(&self, key: &str) -> Option<String>;

    /// Replaces the value under `key`.
    ///
    /// # Errors
    /// Returns an error if the backend refuses the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`.
    ///
    /// # Errors
    /// Returns an error if the backend refuses the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl DurableStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Strips the placeholder strings left behind by careless writers.
fn meaningful(raw: Option<String>) -> Option<String> {
    raw.filter(|value| {
        let trimmed = value.trim();
        !trimmed.is_empty() && trimmed != "undefined" && trimmed != "null"
    })
}

/// Reads the favorites array, dropping anything unusable.
///
/// Missing, placeholder or malformed values read as an empty set; entries
/// without a uid or type are skipped, as are duplicates.
#[must_use]
pub fn read_favorites(storage: &dyn DurableStorage) -> Vec<FavoriteEntry> {
    let Some(raw) = meaningful(storage.read(FAVORITES_KEY)) else {
        return Vec::new();
    };
    let Ok(Value::Array(values)) = serde_json::from_str::<Value>(&raw) else {
        warn!(key = FAVORITES_KEY, "ignoring malformed favorites");
        return Vec::new();
    };

    let mut favorites: Vec<FavoriteEntry> = Vec::with_capacity(values.len());
    for entry in values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<FavoriteEntry>(value).ok())
        .filter(|entry| !entry.uid.is_empty())
    {
        if !favorites
            .iter()
            .any(|known| known.matches(&entry.uid, entry.kind))
        {
            favorites.push(entry);
        }
    }
    favorites
}

/// Persists the favorites array.
///
/// # Errors
/// Returns an error if encoding or the backend write fails.
pub fn write_favorites(
    storage: &dyn DurableStorage,
    favorites: &[FavoriteEntry],
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(favorites)?;
    storage.write(FAVORITES_KEY, &encoded)
}

/// Reads the bearer token, treating placeholders as absent.
#[must_use]
pub fn read_token(storage: &dyn DurableStorage) -> Option<String> {
    meaningful(storage.read(TOKEN_KEY))
}
