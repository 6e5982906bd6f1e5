//! Platform abstraction layer
//!
//! Handles browser/native differences for storage: LocalStorage on web, an
//! in-memory map everywhere else (and in tests).

use std::collections::HashMap;

/// String key/value store
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    /// Store a value. Returns false if the backend refused the write.
    fn set_item(&mut self, key: &str, value: &str) -> bool;
}

/// Process-local storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> bool {
        self.items.insert(key.to_string(), value.to_string());
        true
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&mut self, key: &str, value: &str) -> bool {
        Self::storage()
            .map(|s| s.set_item(key, value).is_ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let mut store = MemoryStorage::new();
        assert_eq!(store.get_item("k"), None);
        assert!(store.set_item("k", "1.5"));
        assert_eq!(store.get_item("k").as_deref(), Some("1.5"));
        assert!(store.set_item("k", "2"));
        assert_eq!(store.get_item("k").as_deref(), Some("2"));
    }
}
