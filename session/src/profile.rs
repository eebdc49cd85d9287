//! Persisted user profile merged from login responses and token claims.
//!
//! The record is loosely typed on purpose: the backend adds fields over time
//! and the UI reads whatever it recognizes. Unknown keys survive a round trip
//! through `extra`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::claims::Claims;
use crate::role::Role;

/// User profile stored next to the bearer token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    /// Token issue time, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    /// Token expiry, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub authenticated: bool,
    /// Set for sessions created through the federated (Google) sign-in.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_google_user: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Role recorded in the profile, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    #[must_use]
    pub fn is_federated(&self) -> bool {
        self.is_google_user
    }

    /// Best human-readable label: full name, then name, then email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [&self.full_name, &self.name, &self.email]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.trim().is_empty())
            .unwrap_or("Guest")
    }

    /// Fill identity and timing fields from decoded claims.
    ///
    /// Fields the login response already supplied win over claims, except
    /// the timestamps which only the token knows.
    pub fn merge_claims(&mut self, claims: &Claims) {
        if self.role.as_deref().is_none_or(str::is_empty) {
            self.role.clone_from(&claims.scope);
        }
        if self.user_id.is_none() {
            self.user_id.clone_from(&claims.sub);
        }
        if claims.iat.is_some() {
            self.issued_at = claims.iat;
        }
        if claims.exp.is_some() {
            self.expires_at = claims.exp;
        }
    }

    /// Whether the recorded expiry is at or before `now_secs`.
    /// Profiles without an expiry never report expired.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_secs)
    }
}

/// Accept user ids encoded either as JSON strings or integers.
pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
