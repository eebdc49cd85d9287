//! REST API helpers for the authentication backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning a transport error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers failures with the same `{code, message}` envelope as
//! successes, often under a 4xx status, so bodies are parsed regardless of
//! status. Only an unreadable body or a failed request is a transport error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::LoginError;
use session::login::{ApiResponse, AuthResult, IntrospectResult};

#[cfg(any(test, feature = "csr"))]
const TOKEN_PATH: &str = "/auth/token";
#[cfg(any(test, feature = "csr"))]
const FEDERATED_PATH: &str = "/auth/outbound/google";
#[cfg(any(test, feature = "csr"))]
const INTROSPECT_PATH: &str = "/auth/introspect";
#[cfg(any(test, feature = "csr"))]
const LOGOUT_PATH: &str = "/auth/logout";

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn unreadable_response_message(status: u16) -> String {
    format!("unreadable response (status {status})")
}

#[cfg(any(test, feature = "csr"))]
fn login_payload(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    payload: &serde_json::Value,
) -> Result<ApiResponse<T>, LoginError> {
    let url = endpoint(crate::util::config::api_base(), path);
    let resp = gloo_net::http::Request::post(&url)
        .json(payload)
        .map_err(|e| LoginError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoginError::Transport(e.to_string()))?;
    let status = resp.status();
    resp.json::<ApiResponse<T>>().await.map_err(|e| {
        log::debug!("{path}: {e}");
        LoginError::Transport(unreadable_response_message(status))
    })
}

/// Exchange username and password for a session via `POST /auth/token`.
///
/// # Errors
///
/// Returns [`LoginError::Transport`] if the request fails or the body is not
/// a response envelope. Backend rejections come back as `Ok` with their code.
pub async fn login(username: &str, password: &str) -> Result<ApiResponse<AuthResult>, LoginError> {
    #[cfg(feature = "csr")]
    {
        post_json(TOKEN_PATH, &login_payload(username, password)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(LoginError::Transport("not available outside the browser".to_owned()))
    }
}

/// Exchange a federated identity token via `POST /auth/outbound/google`.
///
/// # Errors
///
/// Same as [`login`].
pub async fn login_federated(id_token: &str) -> Result<ApiResponse<AuthResult>, LoginError> {
    #[cfg(feature = "csr")]
    {
        post_json(FEDERATED_PATH, &serde_json::json!({ "idToken": id_token })).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id_token;
        Err(LoginError::Transport("not available outside the browser".to_owned()))
    }
}

/// Ask the backend whether `token` is still valid via `POST /auth/introspect`.
///
/// # Errors
///
/// Same as [`login`].
pub async fn introspect(token: &str) -> Result<ApiResponse<IntrospectResult>, LoginError> {
    #[cfg(feature = "csr")]
    {
        post_json(INTROSPECT_PATH, &serde_json::json!({ "token": token })).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(LoginError::Transport("not available outside the browser".to_owned()))
    }
}

/// Invalidate `token` server-side via `POST /auth/logout`. Best effort.
pub async fn logout(token: &str) {
    #[cfg(feature = "csr")]
    {
        let outcome: Result<ApiResponse<serde_json::Value>, LoginError> =
            post_json(LOGOUT_PATH, &serde_json::json!({ "token": token })).await;
        if let Err(e) = outcome {
            log::warn!("server logout failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}
