//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components need the same clock, the same blocking failure
//! notice, and the same cross-tab refresh of the header's session view.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;

/// Current time in epoch seconds.
pub fn now_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Show a blocking notification, e.g. a rejected login.
pub fn notify_blocking(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::debug!("alert suppressed ({e:?}): {message}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("{message}");
    }
}

/// Reload `auth` whenever another tab changes the session keys.
///
/// Header UI only; navigation decisions already in flight are not revisited.
pub fn install_storage_sync(auth: RwSignal<AuthState>, app: AppSession) {
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            let touches_session = ev
                .key()
                .map_or(true, |key| key.starts_with(&app.config.namespace));
            if touches_session {
                auth.set(AuthState::from_profile(app.store.profile()));
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, app);
    }
}
