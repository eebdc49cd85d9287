//! Credential store: the persisted `{token, profile}` pair.
//!
//! DESIGN
//! ======
//! Keys live under a namespace so clearing a session never touches unrelated
//! state sharing the same storage (cart drafts, theme, etc.). Reads never
//! fail: missing or corrupt values read as absent and the session degrades to
//! "not authenticated".
//!
//! TRADE-OFFS
//! ==========
//! `set_credential` drops the stored profile, then writes the token, then the
//! new profile. An interruption after the first step leaves a token without a
//! profile, which reads as unauthenticated rather than pairing the new token
//! with an earlier user's profile.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::SessionConfig;
use crate::profile::Profile;
use crate::storage::{SessionStorage, StorageError};

const TOKEN_FIELD: &str = "token";
const PROFILE_FIELD: &str = "profile";

/// Session credential persistence over any [`SessionStorage`].
#[derive(Clone, Debug)]
pub struct CredentialStore<S> {
    storage: S,
    namespace: String,
    token_key: String,
    profile_key: String,
}

impl<S: SessionStorage> CredentialStore<S> {
    #[must_use]
    pub fn new(storage: S, config: &SessionConfig) -> Self {
        Self {
            storage,
            namespace: config.namespace.clone(),
            token_key: config.key(TOKEN_FIELD),
            profile_key: config.key(PROFILE_FIELD),
        }
    }

    /// Underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True iff both a token and a readable profile are stored.
    ///
    /// Presence only: the token is not decoded and expiry is not consulted.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.profile().is_some()
    }

    /// Stored bearer token. Empty values read as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read(&self.token_key)
    }

    /// Stored profile. Values that do not parse read as absent.
    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        let raw = self.read(&self.profile_key)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::debug!("ignoring unreadable stored profile: {e}");
                None
            }
        }
    }

    /// Persist token then profile, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either write is rejected. The previous
    /// profile is gone by then, so the store reads as unauthenticated.
    pub fn set_credential(&self, token: &str, profile: &Profile) -> Result<(), StorageError> {
        self.storage.remove(&self.profile_key);
        self.storage.set(&self.token_key, token)?;
        self.set_profile(profile)
    }

    /// Persist only the profile.
    ///
    /// Federated sign-ins may establish a session this way when the backend
    /// issues no token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the profile cannot be encoded or written.
    pub fn set_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile).map_err(|e| StorageError::Write {
            key: self.profile_key.clone(),
            reason: e.to_string(),
        })?;
        self.storage.set(&self.profile_key, &raw)
    }

    /// Remove every key under the session namespace. Idempotent.
    ///
    /// The namespace always ends in a separator (see
    /// [`SessionConfig::with_namespace`]), so sibling keys such as
    /// `bloomTheme` survive a `bloom.` namespace.
    pub fn clear_all(&self) {
        let keys: Vec<String> = self
            .storage
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(&self.namespace))
            .collect();
        for key in &keys {
            self.storage.remove(key);
        }
        log::debug!("cleared {} session key(s)", keys.len());
    }

    /// Wipe the entire backing storage, including state owned by other features.
    pub fn clear_storage(&self) {
        self.storage.clear();
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }
}
