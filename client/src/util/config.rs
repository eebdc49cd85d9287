//! Build-time client configuration.
//!
//! A browser bundle has no process environment, so settings are captured by
//! `option_env!` when the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::SessionConfig;

const DEFAULT_API_BASE: &str = "/api";

/// Base URL of the authentication backend (`BLOOM_API_BASE`).
pub fn api_base() -> &'static str {
    option_env!("BLOOM_API_BASE")
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

/// Identity-provider sign-in URL (`BLOOM_FEDERATED_START_URL`). The provider
/// redirects back to `/login/federated?id_token=...`.
pub fn federated_start_url() -> Option<&'static str> {
    option_env!("BLOOM_FEDERATED_START_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

/// Session settings, with `BLOOM_SESSION_NAMESPACE` and
/// `BLOOM_REJECT_EXPIRED` overrides applied.
pub fn session_config() -> SessionConfig {
    build_session_config(option_env!("BLOOM_SESSION_NAMESPACE"), option_env!("BLOOM_REJECT_EXPIRED"))
}

pub(crate) fn build_session_config(namespace: Option<&str>, reject_expired: Option<&str>) -> SessionConfig {
    let mut config = SessionConfig::default();
    if let Some(namespace) = namespace {
        config = config.with_namespace(namespace);
    }
    if let Some(reject) = reject_expired.and_then(parse_bool) {
        config = config.with_reject_expired(reject);
    }
    config
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
