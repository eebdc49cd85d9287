use super::*;
use crate::role::Role;
use crate::storage::{MemoryStorage, StorageError};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

fn store() -> CredentialStore<MemoryStorage> {
    CredentialStore::new(MemoryStorage::new(), &SessionConfig::default())
}

fn jwt(payload: &serde_json::Value) -> String {
    format!(
        "eyJhbGciOiJIUzUxMiJ9.{}.sig",
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

fn success(result: AuthResult) -> ApiResponse<AuthResult> {
    ApiResponse { code: 1000, message: None, result: Some(result) }
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn parses_login_response_envelope() {
    let raw = json!({
        "code": 1000,
        "result": {
            "token": "a.b.c",
            "authenticated": true,
            "email": "lily@bloom.test",
            "fullName": "Lily Evans",
            "role": "USER",
            "userId": 12
        }
    });
    let response: ApiResponse<AuthResult> = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(response.code, 1000);
    assert!(response.message.is_none());
    let result = response.result.expect("result");
    assert_eq!(result.full_name.as_deref(), Some("Lily Evans"));
    assert_eq!(result.user_id.as_deref(), Some("12"));
}

#[test]
fn parses_error_envelope_without_result() {
    let raw = json!({ "code": 1005, "message": "User not existed" });
    let response: ApiResponse<AuthResult> = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(response.code, 1005);
    assert!(response.result.is_none());
}

// =============================================================
// establish_session
// =============================================================

#[test]
fn password_login_stores_token_and_merged_profile() {
    let store = store();
    let token = jwt(&json!({ "sub": "u-1", "scope": "ADMIN", "iat": 100, "exp": 200 }));
    let result = AuthResult {
        token: Some(token.clone()),
        authenticated: true,
        email: Some("admin@bloom.test".to_owned()),
        ..AuthResult::default()
    };

    let profile = establish_session(&store, success(result), LoginKind::Password, &SessionConfig::default())
        .expect("login");

    assert_eq!(store.token(), Some(token));
    assert_eq!(store.profile(), Some(profile.clone()));
    assert_eq!(profile.role(), Some(Role::Admin));
    assert_eq!(profile.user_id.as_deref(), Some("u-1"));
    assert_eq!(profile.issued_at, Some(100));
    assert_eq!(profile.expires_at, Some(200));
    assert!(profile.authenticated);
    assert!(!profile.is_google_user);
}

#[test]
fn undecodable_token_still_logs_in_with_response_fields() {
    let store = store();
    let result = AuthResult { token: Some("opaque".to_owned()), role: Some("STAFF".to_owned()), ..AuthResult::default() };
    let profile = establish_session(&store, success(result), LoginKind::Password, &SessionConfig::default())
        .expect("login");
    assert_eq!(profile.role(), Some(Role::Staff));
    assert!(profile.expires_at.is_none());
    assert!(store.is_authenticated());
}

#[test]
fn rejection_leaves_store_untouched() {
    let store = store();
    store.storage().set("bloom.session.token", "previous").expect("write");
    let response = ApiResponse { code: 1006, message: Some("Unauthenticated".to_owned()), result: None };

    let err = establish_session(&store, response, LoginKind::Password, &SessionConfig::default())
        .expect_err("rejected");

    assert_eq!(err, LoginError::Rejected { code: 1006, message: "Unauthenticated".to_owned() });
    assert_eq!(err.user_message(), "Unauthenticated");
    assert_eq!(store.token().as_deref(), Some("previous"));
}

#[test]
fn rejection_without_message_uses_default_text() {
    let response = ApiResponse { code: 500, message: Some("  ".to_owned()), result: None };
    let err = establish_session(&store(), response, LoginKind::Password, &SessionConfig::default())
        .expect_err("rejected");
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn custom_success_code_is_honored() {
    let store = store();
    let config = SessionConfig::default().with_success_code(0);
    let response = ApiResponse {
        code: 0,
        message: None,
        result: Some(AuthResult { token: Some("t".to_owned()), role: Some("USER".to_owned()), ..AuthResult::default() }),
    };
    assert!(establish_session(&store, response, LoginKind::Password, &config).is_ok());
}

#[test]
fn password_login_without_token_fails() {
    let store = store();
    let result = AuthResult { role: Some("USER".to_owned()), ..AuthResult::default() };
    let err = establish_session(&store, success(result), LoginKind::Password, &SessionConfig::default())
        .expect_err("missing token");
    assert_eq!(err, LoginError::MissingToken);
    assert!(store.storage().is_empty());
}

#[test]
fn federated_login_without_token_stores_profile_only() {
    let store = store();
    let result = AuthResult { email: Some("g@bloom.test".to_owned()), role: Some("USER".to_owned()), ..AuthResult::default() };
    let profile = establish_session(&store, success(result), LoginKind::Federated, &SessionConfig::default())
        .expect("login");
    assert!(profile.is_google_user);
    assert!(store.token().is_none());
    assert_eq!(store.profile(), Some(profile));
}

#[test]
fn federated_relogin_without_token_drops_previous_token() {
    let store = store();
    let admin = AuthResult {
        token: Some("x.y.z".to_owned()),
        email: Some("root@bloom.test".to_owned()),
        role: Some("ADMIN".to_owned()),
        ..AuthResult::default()
    };
    establish_session(&store, success(admin), LoginKind::Password, &SessionConfig::default()).expect("login");

    let guest = AuthResult { email: Some("guest@g".to_owned()), role: Some("USER".to_owned()), ..AuthResult::default() };
    establish_session(&store, success(guest), LoginKind::Federated, &SessionConfig::default()).expect("login");

    assert_eq!(store.token(), None);
    let profile = store.profile().expect("profile");
    assert_eq!(profile.email.as_deref(), Some("guest@g"));
    assert_eq!(profile.role.as_deref(), Some("USER"));
}

#[test]
fn verification_after_tokenless_relogin_cannot_restore_previous_role() {
    let store = store();
    let admin = AuthResult { token: Some("x.y.z".to_owned()), role: Some("ADMIN".to_owned()), ..AuthResult::default() };
    establish_session(&store, success(admin), LoginKind::Password, &SessionConfig::default()).expect("login");
    let guest = AuthResult { role: Some("USER".to_owned()), ..AuthResult::default() };
    establish_session(&store, success(guest), LoginKind::Federated, &SessionConfig::default()).expect("login");

    // Without a stored token there is nothing to verify; the client skips introspection.
    assert!(store.token().is_none());
    assert_eq!(store.profile().and_then(|p| p.role).as_deref(), Some("USER"));
}

/// Memory storage whose profile writes always fail.
#[derive(Clone, Default)]
struct FullStorage {
    inner: MemoryStorage,
}

impl SessionStorage for FullStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key.ends_with("profile") {
            return Err(StorageError::Unavailable);
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }

    fn clear(&self) {
        self.inner.clear();
    }
}

#[test]
fn failed_credential_write_leaves_no_session_behind() {
    let config = SessionConfig::default();
    let backend = FullStorage::default();
    backend.inner.set(&config.key("token"), "old.tok.en").expect("write");
    backend
        .inner
        .set(&config.key("profile"), r#"{"role":"ADMIN","authenticated":true}"#)
        .expect("write");
    let store = CredentialStore::new(backend, &config);

    let result = AuthResult { token: Some("new.tok.en".to_owned()), role: Some("USER".to_owned()), ..AuthResult::default() };
    let err = establish_session(&store, success(result), LoginKind::Password, &config).expect_err("full");

    assert_eq!(err, LoginError::Storage(StorageError::Unavailable));
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.profile().is_none());
}

// =============================================================
// apply_verification
// =============================================================

fn logged_in_store() -> CredentialStore<MemoryStorage> {
    let store = store();
    let profile = Profile { name: Some("old".to_owned()), role: Some("USER".to_owned()), authenticated: true, ..Profile::default() };
    store.set_credential("tok", &profile).expect("write");
    store
}

#[test]
fn valid_verification_refreshes_profile() {
    let store = logged_in_store();
    let response = ApiResponse {
        code: 1000,
        message: None,
        result: Some(IntrospectResult { valid: true, name: Some("new".to_owned()), ..IntrospectResult::default() }),
    };
    assert!(apply_verification(&store, Ok(response), &SessionConfig::default()));
    let profile = store.profile().expect("profile");
    assert_eq!(profile.name.as_deref(), Some("new"));
    assert_eq!(profile.role.as_deref(), Some("USER"));
    assert_eq!(store.token().as_deref(), Some("tok"));
}

#[test]
fn invalid_verification_clears_session() {
    let store = logged_in_store();
    let response = ApiResponse { code: 1000, message: None, result: Some(IntrospectResult::default()) };
    assert!(!apply_verification(&store, Ok(response), &SessionConfig::default()));
    assert!(store.storage().is_empty());
}

#[test]
fn error_code_verification_clears_session() {
    let store = logged_in_store();
    let response = ApiResponse::<IntrospectResult> { code: 1006, message: None, result: None };
    assert!(!apply_verification(&store, Ok(response), &SessionConfig::default()));
    assert!(!store.is_authenticated());
}

#[test]
fn unreachable_backend_clears_session() {
    let store = logged_in_store();
    let outcome = Err(LoginError::Transport("connection refused".to_owned()));
    assert!(!apply_verification(&store, outcome, &SessionConfig::default()));
    assert!(store.storage().is_empty());
}

#[test]
fn logout_clears_only_session_keys() {
    let store = logged_in_store();
    store.storage().set("draft", "{}").expect("write");
    logout(&store);
    assert_eq!(store.storage().keys(), vec!["draft".to_owned()]);
}

#[test]
fn user_messages_are_friendly() {
    assert_eq!(
        LoginError::Transport("x".to_owned()).user_message(),
        "Could not reach the server. Please try again."
    );
    assert!(LoginError::Storage(StorageError::Unavailable).user_message().contains("could not be saved"));
}
