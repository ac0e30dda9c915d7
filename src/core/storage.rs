//! Key-value persistence for the browser session and preferences
//!
//! The browser's `localStorage` is abstracted behind [`KeyValueStore`] so the
//! session and theme logic can be exercised natively with [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Storage key holding the JSON-serialized session record
pub const SESSION_KEY: &str = "currentUser";

/// Storage key holding the theme preference (`"dark"` / `"light"`)
pub const THEME_KEY: &str = "theme";

/// Errors raised while reading or writing persisted values
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write key `{0}`")]
    Write(String),
    #[error("failed to remove key `{0}`")]
    Remove(String),
    #[error("malformed stored value: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Minimal string key-value store, mirroring the Web Storage API
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for exercising session and theme persistence natively
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);

        store.remove(THEME_KEY).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }
}
