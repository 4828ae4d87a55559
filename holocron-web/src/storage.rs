//! Browser local storage backend.

use gloo_storage::{LocalStorage, Storage};
use shared::storage::{DurableStorage, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage`, accessed with raw string values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn backend_error(error: &JsValue) -> StorageError {
    StorageError::Backend {
        message: error.as_string().unwrap_or_else(|| format!("{error:?}")),
    }
}

impl DurableStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|error| backend_error(&error))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|error| backend_error(&error))
    }
}
