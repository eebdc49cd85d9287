use super::*;
use serde_json::json;

fn sample_profile() -> Profile {
    Profile {
        email: Some("rose@bloom.test".to_owned()),
        name: Some("rose".to_owned()),
        full_name: Some("Rose Tyler".to_owned()),
        role: Some("USER".to_owned()),
        user_id: Some("42".to_owned()),
        issued_at: Some(1_700_000_000),
        expires_at: Some(1_700_003_600),
        authenticated: true,
        is_google_user: false,
        extra: Map::new(),
    }
}

#[test]
fn serializes_with_camel_case_keys() {
    let value = serde_json::to_value(sample_profile()).expect("serialize");
    assert_eq!(value["fullName"], "Rose Tyler");
    assert_eq!(value["userId"], "42");
    assert_eq!(value["issuedAt"], 1_700_000_000);
    assert_eq!(value["expiresAt"], 1_700_003_600);
    assert_eq!(value["authenticated"], true);
    assert!(value.get("isGoogleUser").is_none());
}

#[test]
fn unknown_fields_survive_round_trip() {
    let raw = json!({
        "email": "a@b.test",
        "role": "STAFF",
        "authenticated": true,
        "avatar": "https://img.test/a.png"
    });
    let profile: Profile = serde_json::from_value(raw.clone()).expect("deserialize");
    assert_eq!(profile.extra.get("avatar"), Some(&json!("https://img.test/a.png")));
    assert_eq!(serde_json::to_value(&profile).expect("serialize"), raw);
}

#[test]
fn numeric_user_id_is_accepted() {
    let profile: Profile = serde_json::from_value(json!({ "userId": 7 })).expect("deserialize");
    assert_eq!(profile.user_id.as_deref(), Some("7"));
}

#[test]
fn object_user_id_is_rejected() {
    let result = serde_json::from_value::<Profile>(json!({ "userId": { "id": 1 } }));
    assert!(result.is_err());
}

#[test]
fn google_flag_reads_from_camel_case() {
    let profile: Profile = serde_json::from_value(json!({ "isGoogleUser": true })).expect("deserialize");
    assert!(profile.is_federated());
    assert!(!profile.authenticated);
}

#[test]
fn display_name_prefers_full_name() {
    let mut profile = sample_profile();
    assert_eq!(profile.display_name(), "Rose Tyler");
    profile.full_name = Some("  ".to_owned());
    assert_eq!(profile.display_name(), "rose");
    profile.name = None;
    assert_eq!(profile.display_name(), "rose@bloom.test");
    assert_eq!(Profile::default().display_name(), "Guest");
}

#[test]
fn merge_claims_fills_missing_identity() {
    let mut profile = Profile::default();
    let claims = Claims {
        sub: Some("u-9".to_owned()),
        scope: Some("ADMIN".to_owned()),
        iat: Some(10),
        exp: Some(20),
        extra: Map::new(),
    };
    profile.merge_claims(&claims);
    assert_eq!(profile.role(), Some(Role::Admin));
    assert_eq!(profile.user_id.as_deref(), Some("u-9"));
    assert_eq!(profile.issued_at, Some(10));
    assert_eq!(profile.expires_at, Some(20));
}

#[test]
fn merge_claims_keeps_response_role() {
    let mut profile = sample_profile();
    let claims = Claims { scope: Some("ADMIN".to_owned()), ..Claims::default() };
    profile.merge_claims(&claims);
    assert_eq!(profile.role.as_deref(), Some("USER"));
    assert_eq!(profile.expires_at, Some(1_700_003_600));
}

#[test]
fn is_expired_compares_inclusive() {
    let profile = sample_profile();
    assert!(!profile.is_expired(1_700_003_599));
    assert!(profile.is_expired(1_700_003_600));
    assert!(!Profile::default().is_expired(i64::MAX));
}
