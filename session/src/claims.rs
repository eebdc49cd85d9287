//! Advisory decode of bearer-token claims.
//!
//! The token is `header.payload.signature`. Only the payload is read, and its
//! signature is never checked: the values drive routing and display, while
//! the backend remains the authority on every request it serves. Failures are
//! returned as [`ClaimsError`] so callers have to fall back to "no claims".

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::role::Role;

/// Error returned by [`decode_claims`].
#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    /// The token did not split into exactly three dot-separated segments.
    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),
    /// The payload segment is not valid base64url.
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload bytes are not a JSON claims object.
    #[error("token payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims read from a token payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id).
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::profile::deserialize_opt_id")]
    pub sub: Option<String>,
    /// Role string, e.g. `ADMIN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Issued-at, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.scope.as_deref().and_then(Role::parse)
    }

    /// Whether `exp` is at or before `now_secs`. Tokens without `exp` never expire here.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

/// Decode the payload segment of `token` into [`Claims`].
///
/// # Errors
///
/// Returns [`ClaimsError::SegmentCount`] for tokens that are not three
/// segments, [`ClaimsError::Base64`] for an undecodable payload, and
/// [`ClaimsError::Json`] when the payload is not a claims object.
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClaimsError::SegmentCount(segments.len()));
    };
    let bytes = decode_segment(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// base64url → standard alphabet, padded to a multiple of four.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let mut normalized: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }
    STANDARD.decode(normalized)
}
