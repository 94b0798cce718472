use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::traits::StorageBackend;

/// In-memory, HashMap-based storage backend.
///
/// Intended for tests and for hosts without browser storage. Entries are
/// held behind a `RwLock` and lost when the backend is dropped.
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    available: bool,
}

impl InMemoryStorage {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            available: true,
        }
    }

    /// A backend that reports itself as missing from the runtime.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Return a sorted list of all stored keys.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for InMemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        let mut map = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("entry_count", &self.len())
            .field("available", &self.available)
            .finish()
    }
}
