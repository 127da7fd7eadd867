//! Capability-checked key/value persistence.
//!
//! The token and theme stores never touch a concrete backend directly; they
//! receive an `Rc<dyn KeyValueStorage>` from the composition root. Every
//! operation is infallible from the caller's point of view: an unavailable
//! or failing backend reads as empty and ignores writes.

use std::{cell::RefCell, collections::HashMap, fmt};

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

/// Plain string storage keyed by fixed names.
pub trait KeyValueStorage: fmt::Debug {
    /// Whether the backend can currently persist anything.
    fn is_available(&self) -> bool;

    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// Storage for contexts without persistence (headless rendering, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStorage;

impl KeyValueStorage for NoopStorage {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-process storage that lives as long as the value itself.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the storage with existing entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_storage_ignores_everything() {
        let storage = NoopStorage;
        storage.set("dev_forum_token", "abc");

        assert!(!storage.is_available());
        assert_eq!(storage.get("dev_forum_token"), None);
        storage.remove("dev_forum_token");
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.is_available());
        assert!(storage.is_empty());

        storage.set("theme", "dark");
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));

        storage.set("theme", "light");
        assert_eq!(storage.get("theme").as_deref(), Some("light"));
        assert_eq!(storage.len(), 1);

        storage.remove("theme");
        assert_eq!(storage.get("theme"), None);
    }

    #[test]
    fn test_memory_storage_with_entries() {
        let storage = MemoryStorage::with_entries([("dev_forum_token", "t-1"), ("theme", "dark")]);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("dev_forum_token").as_deref(), Some("t-1"));
    }
}
