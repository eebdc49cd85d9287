//! Key/value substrate behind the credential store.
//!
//! DESIGN
//! ======
//! The browser's `localStorage` is synchronous, per-origin, and shared by
//! every tab. [`SessionStorage`] mirrors that shape so the store can run
//! against it in the browser and against [`MemoryStorage`] everywhere else.
//! Methods take `&self`; backends provide their own interior mutability.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Error returned when a backend refuses a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No backing store is reachable (e.g. storage disabled by the browser).
    #[error("session storage unavailable")]
    Unavailable,
    /// The backend rejected the write, typically on quota exhaustion.
    #[error("session storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key/value storage.
pub trait SessionStorage {
    /// Read a value; `None` when the key is absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);

    /// All keys currently present.
    fn keys(&self) -> Vec<String>;

    /// Erase every key in the backend, including ones this crate never wrote.
    fn clear(&self);
}

/// In-memory storage. Clones share the same map, like tabs sharing an origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.map().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn clear(&self) {
        self.map().clear();
    }
}
