//! # localStorage key-value store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through [`web_sys::Storage`].
//!
//! The store is a zero-size handle: the `Storage` object is looked up on every
//! call, so the handle can be created before the page has a window (during
//! hydration) and cloned freely. When storage is disabled (private mode,
//! sandboxed iframes) reads return `None` and writes fail with
//! [`StorageError::Unavailable`]; the session then lives only in memory.

use crate::session::{KeyValueStore, StorageError};

/// `window.localStorage`-backed KeyValueStore for web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()
            .ok_or(StorageError::Unavailable)?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}
