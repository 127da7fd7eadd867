use std::rc::Rc;

use shared::config::client::DEFAULT_TOKEN_KEY;

use crate::storage::KeyValueStorage;

/// Holds at most one opaque bearer token under a fixed storage key.
#[derive(Debug, Clone)]
pub struct TokenStore {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
}

impl TokenStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Token store using the default `dev_forum_token` key.
    pub fn with_default_key(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self::new(storage, DEFAULT_TOKEN_KEY)
    }

    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.storage.get(&self.key)
    }

    pub fn set(&self, token: &str) {
        self.storage.set(&self.key, token);
    }

    pub fn remove(&self) {
        self.storage.remove(&self.key);
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}
