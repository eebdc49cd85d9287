//! Roles carried by a session and the role each route area demands.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use crate::config::SessionConfig;

/// A user's role as recorded in the profile or the token's `scope` claim.
///
/// The backend emits upper-case names; the lower-case spelling is accepted as
/// the single alternate form. Any other casing is treated as an unrelated role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Staff,
    User,
    Other(String),
}

impl Role {
    /// Parse a raw role string. Empty strings carry no role.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "ADMIN" | "admin" => Some(Self::Admin),
            "STAFF" | "staff" => Some(Self::Staff),
            "USER" | "user" => Some(Self::User),
            other => Some(Self::Other(other.to_owned())),
        }
    }

    /// Canonical wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::Staff => "STAFF",
            Self::User => "USER",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this role may enter an area with the given requirement.
    #[must_use]
    pub fn satisfies(&self, requirement: RouteRequirement) -> bool {
        match requirement {
            RouteRequirement::Authenticated => true,
            RouteRequirement::Admin => *self == Self::Admin,
            RouteRequirement::Staff => *self == Self::Staff,
        }
    }

    /// Where a freshly logged-in user of this role lands.
    #[must_use]
    pub fn landing_path<'a>(&self, config: &'a SessionConfig) -> &'a str {
        match self {
            Self::Admin => &config.admin_root,
            Self::Staff => &config.staff_root,
            Self::User | Self::Other(_) => "/",
        }
    }
}

/// Role demanded by a protected path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    Admin,
    Staff,
    /// Any logged-in user.
    Authenticated,
}

impl RouteRequirement {
    /// Classify a path by plain prefix match against the configured roots.
    #[must_use]
    pub fn for_path(path: &str, config: &SessionConfig) -> Self {
        if path.starts_with(&config.admin_root) {
            Self::Admin
        } else if path.starts_with(&config.staff_root) {
            Self::Staff
        } else {
            Self::Authenticated
        }
    }
}
