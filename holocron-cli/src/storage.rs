//! File-backed durable storage for the CLI.

use directories::BaseDirs;
use serde_json::{Map, Value};
use shared::storage::{DurableStorage, StorageError};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

const FILE_NAME: &str = "storage.json";

/// Default directory holding the storage file.
pub fn default_data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.data_dir().join("holocron"))
        .unwrap_or_else(|| PathBuf::from("./.holocron"))
}

/// A flat JSON object of string values, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage kept in `dir/storage.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> Map<String, Value> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(entries)) => entries,
            _ => {
                warn!(path = %self.path.display(), "ignoring unreadable storage file");
                Map::new()
            }
        }
    }

    fn persist(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl DurableStorage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries();
        entries.insert(key.to_owned(), Value::String(value.to_owned()));
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::storage::{FAVORITES_KEY, TOKEN_KEY, read_favorites, read_token};
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(&dir.path().join("nested"));
        assert_eq!(storage.read(TOKEN_KEY), None);
        assert!(storage.remove(TOKEN_KEY).is_ok());
        assert!(!storage.path().exists());
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = TempDir::new().unwrap();
        FileStorage::in_dir(dir.path()).write(TOKEN_KEY, "abc").unwrap();

        let reopened = FileStorage::in_dir(dir.path());
        assert_eq!(read_token(&reopened).as_deref(), Some("abc"));

        reopened.remove(TOKEN_KEY).unwrap();
        assert_eq!(FileStorage::in_dir(dir.path()).read(TOKEN_KEY), None);
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        fs::write(storage.path(), "not json").unwrap();

        assert!(read_favorites(&storage).is_empty());
        storage.write(FAVORITES_KEY, "[]").unwrap();
        assert_eq!(storage.read(FAVORITES_KEY).as_deref(), Some("[]"));
    }
}
