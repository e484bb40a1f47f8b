//! # Session: the current user, mirrored to persistent storage
//!
//! [`Session`] owns the authenticated [`User`] (or none) and keeps a serialized
//! copy of it in a [`KeyValueStore`] under a single key. The two are updated
//! together, so a reload of the page restores exactly what was in memory.
//!
//! ## Lifecycle
//!
//! | Method | Memory | Storage |
//! |--------|--------|---------|
//! | [`restore`](Session::restore) | set from the stored record | corrupted record removed |
//! | [`login`](Session::login) | set | written |
//! | [`logout`](Session::logout) | cleared | removed |
//!
//! The stored record is plain JSON with no integrity protection.

use thiserror::Error;

use crate::models::User;

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("could not serialize the session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The current user plus its persisted mirror.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    key: String,
    user: Option<User>,
}

impl<S: KeyValueStore> Session<S> {
    /// Create an anonymous session persisting under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            user: None,
        }
    }

    /// Load the persisted user, if any.
    ///
    /// A record that does not parse is removed and the session stays anonymous.
    pub fn restore(&mut self) -> Option<&User> {
        self.user = None;
        let raw = self.store.get(&self.key)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = user.id, "restored session");
                self.user = Some(user);
            }
            Err(e) => {
                tracing::warn!("discarding corrupted session record: {e}");
                if let Err(e) = self.store.remove(&self.key) {
                    tracing::warn!("could not remove session record: {e}");
                }
            }
        }
        self.user.as_ref()
    }

    /// Make `user` the current user and persist it.
    pub fn login(&mut self, user: User) {
        if let Err(e) = self.persist(&user) {
            tracing::warn!("session not persisted: {e}");
        }
        tracing::info!(user_id = user.id, admin = user.is_admin, "logged in");
        self.user = Some(user);
    }

    /// Forget the current user in memory and in storage.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = user.id, "logged out");
        }
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!("could not remove session record: {e}");
        }
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.key, &raw)
    }
}
