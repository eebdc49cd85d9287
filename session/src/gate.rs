//! Session gate evaluated before a protected view renders.
//!
//! ARCHITECTURE
//! ============
//! `Checking` is the only non-terminal state. The first failing check moves
//! the gate to `Denied`, clears the session keys, and yields the login path
//! exactly once; `Allowed` renders until the route remounts. Every check
//! fails closed.
//!
//! The role comes from the stored profile, not from a fresh decode of the
//! token, so a structurally invalid token still passes when the profile
//! carries a role. The backend is the real authority on each request.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::config::SessionConfig;
use crate::role::{Role, RouteRequirement};
use crate::signal::LoginSignal;
use crate::storage::SessionStorage;
use crate::store::CredentialStore;

/// Lifecycle of one gate instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Allowed,
    Denied,
}

/// Why a gate denied access. Logged only; users always just see the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DenyReason {
    #[error("no stored session")]
    NotAuthenticated,
    #[error("session has no token")]
    MissingToken,
    #[error("session has no role")]
    MissingRole,
    #[error("route requires the admin role")]
    AdminRequired,
    #[error("route requires the staff role")]
    StaffRequired,
    #[error("session expired")]
    Expired,
}

/// Route guard over a [`CredentialStore`].
#[derive(Clone, Debug)]
pub struct SessionGate {
    config: SessionConfig,
    clock: Option<fn() -> i64>,
}

impl SessionGate {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { config, clock: None }
    }

    /// Epoch-seconds clock used when `reject_expired` is enabled.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Where denied navigations are sent.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.config.login_path
    }

    /// Run the ordered checks for `path` without side effects.
    ///
    /// # Errors
    ///
    /// Returns the first [`DenyReason`] that applies.
    pub fn evaluate<S: SessionStorage>(&self, store: &CredentialStore<S>, path: &str) -> Result<Role, DenyReason> {
        let profile = store.profile().ok_or(DenyReason::NotAuthenticated)?;

        // Federated profiles may be stored without a token.
        if !profile.is_federated() && store.token().is_none() {
            return Err(DenyReason::MissingToken);
        }

        let role = profile.role().ok_or(DenyReason::MissingRole)?;

        match RouteRequirement::for_path(path, &self.config) {
            RouteRequirement::Admin if !role.satisfies(RouteRequirement::Admin) => {
                return Err(DenyReason::AdminRequired);
            }
            RouteRequirement::Staff if !role.satisfies(RouteRequirement::Staff) => {
                return Err(DenyReason::StaffRequired);
            }
            _ => {}
        }

        if self.config.reject_expired {
            let expired = self.clock.map_or(true, |now| profile.is_expired(now()));
            if expired {
                return Err(DenyReason::Expired);
            }
        }

        Ok(role)
    }

    /// Advance `state` out of `Checking`.
    ///
    /// Returns the login path when this call denied access; `None` when the
    /// gate allowed access or had already reached a terminal state.
    pub fn resolve<S: SessionStorage>(&self, state: &mut GateState, store: &CredentialStore<S>, path: &str) -> Option<String> {
        if *state != GateState::Checking {
            return None;
        }
        match self.evaluate(store, path) {
            Ok(role) => {
                log::debug!("gate allowed {path} for role {}", role.as_str());
                *state = GateState::Allowed;
                None
            }
            Err(reason) => {
                log::debug!("gate denied {path}: {reason}");
                store.clear_all();
                *state = GateState::Denied;
                Some(self.config.login_path.clone())
            }
        }
    }

    /// Evaluate a fresh gate for `path`, clearing the session on denial.
    pub fn check<S: SessionStorage>(&self, store: &CredentialStore<S>, path: &str) -> GateState {
        let mut state = GateState::Checking;
        self.resolve(&mut state, store, path);
        state
    }

    /// Like [`check`](Self::check), but waits for any in-flight login first.
    pub async fn check_after_login<S: SessionStorage>(
        &self,
        store: &CredentialStore<S>,
        signal: &LoginSignal,
        path: &str,
    ) -> GateState {
        signal.settled().await;
        self.check(store, path)
    }
}
