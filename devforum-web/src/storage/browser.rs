use gloo_storage::{LocalStorage, Storage};
use tracing::warn;

use super::KeyValueStorage;

/// `window.localStorage`, holding raw (not JSON-encoded) strings.
///
/// Availability is re-checked on every call: private browsing modes and
/// sandboxed iframes can revoke access at any time.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        // Probe through web-sys first: `LocalStorage::raw` throws when storage is missing.
        window.local_storage().ok().flatten()?;
        Some(LocalStorage::raw())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn is_available(&self) -> bool {
        Self::backend().is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        Self::backend()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backend()
            && storage.set_item(key, value).is_err()
        {
            warn!(key, "localStorage rejected write");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backend()
            && storage.remove_item(key).is_err()
        {
            warn!(key, "localStorage rejected removal");
        }
    }
}
