//! Pluggable key-value persistence behind the session store.
//!
//! DESIGN
//! ======
//! Session and theme state read and write through the [`Storage`] trait so
//! the same logic runs against `localStorage` in the browser and an
//! in-memory map in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No backing store exists in this environment (native build, private
    /// browsing with storage disabled, missing `window`).
    #[error("storage unavailable")]
    Unavailable,
    /// The browser rejected the operation, e.g. quota exceeded.
    #[error("storage operation failed: {0}")]
    Js(String),
    /// A value could not be serialized before writing.
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value store with `localStorage` semantics.
pub trait Storage: Clone + Send + Sync + 'static {
    /// Read the value for `key`, `Ok(None)` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an unset key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local store used by tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R, StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Js("memory storage lock poisoned".to_owned()))?;
        Ok(f(&mut entries))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}

/// `window.localStorage`, looked up on every call so the handle never has to
/// cross a `Send` boundary.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(js_error(&e)),
    }
}

#[cfg(feature = "csr")]
fn js_error(value: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
