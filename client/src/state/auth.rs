//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the header and profile page for identity-dependent rendering.
//! Route access is decided by the session gate, never by this snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Profile, Role};

/// Authentication state tracking the current profile and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn from_profile(profile: Option<Profile>) -> Self {
        Self { profile, loading: false }
    }

    /// Name shown in the header, if someone is logged in.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.profile.as_ref().map(|p| p.display_name().to_owned())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().and_then(Profile::role)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }
}
