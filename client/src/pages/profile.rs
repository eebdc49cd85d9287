//! Profile page: shows the stored profile and re-verifies the token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate never contacts the backend. This page does, on mount: an invalid
//! or unverifiable token ends the session and sends the user to login.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use session::Profile;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;

/// Label/value rows shown for a profile, skipping fields it lacks.
pub(crate) fn profile_rows(profile: &Profile) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Name", profile.display_name().to_owned())];
    if let Some(email) = &profile.email {
        rows.push(("Email", email.clone()));
    }
    if let Some(role) = profile.role() {
        rows.push(("Role", role.as_str().to_owned()));
    }
    if profile.is_federated() {
        rows.push(("Sign-in", "Google".to_owned()));
    }
    rows
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();

    auth.set(AuthState::from_profile(app.store.profile()));

    #[cfg(feature = "csr")]
    if let Some(token) = app.store.token() {
        let navigate = leptos_router::hooks::use_navigate();
        auth.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::introspect(&token).await;
            let valid = session::login::apply_verification(&app.store, outcome, &app.config);
            auth.set(AuthState::from_profile(app.store.profile()));
            if !valid {
                navigate(&app.config.login_path, leptos_router::NavigateOptions { replace: true, ..Default::default() });
            }
        });
    }

    let rows = move || auth.get().profile.as_ref().map(profile_rows).unwrap_or_default();

    view! {
        <section class="profile-page">
            <h2>"Your profile"</h2>
            <Show when=move || auth.get().loading>
                <p class="profile-page__status">"Verifying session..."</p>
            </Show>
            <dl class="profile-page__fields">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()
                }}
            </dl>
        </section>
    }
}
