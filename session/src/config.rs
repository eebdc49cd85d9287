//! Session configuration shared by the store, gate, and login flows.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_NAMESPACE: &str = "bloom.session.";
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_ADMIN_ROOT: &str = "/admin";
const DEFAULT_STAFF_ROOT: &str = "/staff";
const NAMESPACE_SEPARATOR: char = '.';

/// Response `code` the authentication backend uses to signal success.
pub const DEFAULT_SUCCESS_CODE: i32 = 1000;

/// Tunables for a session. `Default` matches the production deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix applied to every storage key the credential store writes.
    pub namespace: String,
    /// Route the gate redirects to on denial.
    pub login_path: String,
    /// Path prefix that requires the admin role.
    pub admin_root: String,
    /// Path prefix that requires the staff role.
    pub staff_root: String,
    /// Backend response code treated as success.
    pub success_code: i32,
    /// Deny sessions whose recorded expiry is in the past.
    pub reject_expired: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            admin_root: DEFAULT_ADMIN_ROOT.to_owned(),
            staff_root: DEFAULT_STAFF_ROOT.to_owned(),
            success_code: DEFAULT_SUCCESS_CODE,
            reject_expired: false,
        }
    }
}

impl SessionConfig {
    /// Override the storage namespace. Blank values keep the default.
    ///
    /// A namespace ending in a letter or digit gets a `.` appended so the
    /// prefix never matches unrelated keys that merely share its first word.
    #[must_use]
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        let namespace = namespace.trim();
        if namespace.is_empty() {
            return self;
        }
        let mut namespace = namespace.to_owned();
        if namespace.ends_with(|c: char| c.is_alphanumeric()) {
            namespace.push(NAMESPACE_SEPARATOR);
        }
        self.namespace = namespace;
        self
    }

    #[must_use]
    pub fn with_success_code(mut self, code: i32) -> Self {
        self.success_code = code;
        self
    }

    #[must_use]
    pub fn with_reject_expired(mut self, reject: bool) -> Self {
        self.reject_expired = reject;
        self
    }

    /// Full storage key for a session field.
    #[must_use]
    pub fn key(&self, field: &str) -> String {
        format!("{}{field}", self.namespace)
    }
}
