//! Long-lived session handles provided through Leptos context.

use session::{CredentialStore, LoginSignal, SessionConfig, SessionGate};

use crate::util::auth::now_secs;
use crate::util::config::session_config;
use crate::util::storage::BrowserStorage;

/// Credential store over the browser's `localStorage`.
pub type BrowserStore = CredentialStore<BrowserStorage>;

/// Store, gate, and login signal shared by every page.
#[derive(Clone, Debug)]
pub struct AppSession {
    pub config: SessionConfig,
    pub store: BrowserStore,
    pub gate: SessionGate,
    pub signal: LoginSignal,
}

impl AppSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(session_config())
    }

    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            store: CredentialStore::new(BrowserStorage, &config),
            gate: SessionGate::new(config.clone()).with_clock(now_secs),
            signal: LoginSignal::new(),
            config,
        }
    }
}

impl Default for AppSession {
    fn default() -> Self {
        Self::new()
    }
}
