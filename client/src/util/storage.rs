//! Browser `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `window.localStorage` is looked up on every call instead of being held, so
//! the handle stays `Send + Sync` and can live in Leptos context. Outside the
//! `csr` build there is no browser: reads are empty and writes are rejected.

use session::{SessionStorage, StorageError};

/// `localStorage`-backed [`SessionStorage`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("could not remove {key} from localStorage: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }

    fn keys(&self) -> Vec<String> {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return Vec::new();
            };
            let len = storage.length().unwrap_or(0);
            (0..len).filter_map(|i| storage.key(i).ok().flatten()).collect()
        }
        #[cfg(not(feature = "csr"))]
        {
            Vec::new()
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.clear() {
                    log::warn!("could not clear localStorage: {e:?}");
                }
            }
        }
    }
}
