//! Turning authentication-backend responses into a stored session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate performs the HTTP calls; this module owns what happens
//! to their results. A success code establishes or refreshes the session,
//! anything else is reported back without touching the store. Verification
//! failures of any kind, including an unreachable backend, end the session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};

use crate::claims::decode_claims;
use crate::config::SessionConfig;
use crate::profile::{Profile, deserialize_opt_id};
use crate::storage::{SessionStorage, StorageError};
use crate::store::CredentialStore;

const DEFAULT_REJECTION_MESSAGE: &str = "Login failed";

/// Envelope every backend response uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: i32,
    pub message: Option<String>,
    pub result: Option<T>,
}

/// `result` payload of a login response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub token: Option<String>,
    #[serde(default)]
    pub authenticated: bool,
    pub email: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
}

/// `result` payload of a token verification response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectResult {
    #[serde(default)]
    pub valid: bool,
    pub email: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

/// How the user authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginKind {
    /// Username and password.
    Password,
    /// Third-party identity provider (Google).
    Federated,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("login rejected (code {code}): {message}")]
    Rejected { code: i32, message: String },
    #[error("login response did not include a token")]
    MissingToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("authentication service unreachable: {0}")]
    Transport(String),
}

impl LoginError {
    /// Text for the blocking notification shown on the login screen.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::MissingToken => "Login failed: the server did not return a session.".to_owned(),
            Self::Storage(_) => "Login succeeded but your session could not be saved in this browser.".to_owned(),
            Self::Transport(_) => "Could not reach the server. Please try again.".to_owned(),
        }
    }
}

/// Build the profile for a successful login from response fields and token claims.
#[must_use]
pub fn build_profile(result: &AuthResult, kind: LoginKind) -> Profile {
    let mut profile = Profile {
        email: result.email.clone(),
        name: result.name.clone(),
        full_name: result.full_name.clone(),
        role: result.role.clone(),
        user_id: result.user_id.clone(),
        authenticated: true,
        is_google_user: kind == LoginKind::Federated,
        ..Profile::default()
    };
    if let Some(token) = result.token.as_deref() {
        match decode_claims(token) {
            Ok(claims) => profile.merge_claims(&claims),
            Err(e) => log::debug!("login token carries no readable claims: {e}"),
        }
    }
    profile
}

/// Persist the session described by a login response.
///
/// # Errors
///
/// [`LoginError::Rejected`] for a non-success code (store untouched),
/// [`LoginError::MissingToken`] for a password login without a token, and
/// [`LoginError::Storage`] when the credential cannot be written. Any
/// previous session is removed before writing, and a partial write is
/// cleared, so a failed login never leaves an earlier user signed in.
pub fn establish_session<S: SessionStorage>(
    store: &CredentialStore<S>,
    response: ApiResponse<AuthResult>,
    kind: LoginKind,
    config: &SessionConfig,
) -> Result<Profile, LoginError> {
    if response.code != config.success_code {
        return Err(LoginError::Rejected {
            code: response.code,
            message: response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned()),
        });
    }
    let result = response.result.unwrap_or_default();
    let profile = build_profile(&result, kind);

    let token = result.token.as_deref().filter(|t| !t.is_empty());
    if token.is_none() && kind == LoginKind::Password {
        return Err(LoginError::MissingToken);
    }

    store.clear_all();
    let written = match token {
        Some(token) => store.set_credential(token, &profile),
        None => {
            log::warn!("federated login returned no token; storing profile only");
            store.set_profile(&profile)
        }
    };
    if let Err(e) = written {
        store.clear_all();
        return Err(e.into());
    }
    Ok(profile)
}

/// Apply the outcome of a token verification call.
///
/// Returns whether the session is still valid. Valid responses refresh the
/// stored profile; everything else clears the session.
pub fn apply_verification<S: SessionStorage>(
    store: &CredentialStore<S>,
    outcome: Result<ApiResponse<IntrospectResult>, LoginError>,
    config: &SessionConfig,
) -> bool {
    let refreshed = match outcome {
        Ok(response) if response.code == config.success_code => response.result.filter(|r| r.valid),
        Ok(response) => {
            log::debug!("token verification returned code {}", response.code);
            None
        }
        Err(e) => {
            log::warn!("token verification failed: {e}");
            None
        }
    };
    let (Some(refreshed), Some(mut profile)) = (refreshed, store.profile()) else {
        store.clear_all();
        return false;
    };

    refresh_field(&mut profile.email, refreshed.email);
    refresh_field(&mut profile.name, refreshed.name);
    refresh_field(&mut profile.full_name, refreshed.full_name);
    refresh_field(&mut profile.role, refreshed.role);
    if let Err(e) = store.set_profile(&profile) {
        log::warn!("could not persist refreshed profile: {e}");
    }
    true
}

/// End the session locally.
pub fn logout<S: SessionStorage>(store: &CredentialStore<S>) {
    store.clear_all();
}

fn refresh_field(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *slot = Some(value);
    }
}
