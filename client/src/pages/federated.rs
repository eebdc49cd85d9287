//! Federated sign-in callback: `/login/federated?id_token=...`.
//!
//! The identity provider's own SDK is outside this app; it redirects here
//! with the provider-issued identity token, which is exchanged for a Bloom
//! session exactly like a password login.

#[cfg(test)]
#[path = "federated_test.rs"]
mod federated_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

pub(crate) const MISSING_ID_TOKEN: &str = "Google sign-in did not return an identity token.";

pub(crate) fn validate_id_token(raw: Option<String>) -> Result<String, &'static str> {
    raw.map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
        .ok_or(MISSING_ID_TOKEN)
}

#[component]
pub fn FederatedLoginPage() -> impl IntoView {
    let info = RwSignal::new("Completing Google sign-in...".to_owned());
    let id_token = use_query_map().get_untracked().get("id_token");

    match validate_id_token(id_token) {
        Err(message) => info.set(message.to_owned()),
        Ok(token) => {
            #[cfg(feature = "csr")]
            {
                let app = expect_context::<crate::state::session::AppSession>();
                let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
                let navigate = leptos_router::hooks::use_navigate();
                let in_flight = app.signal.begin();
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::login_federated(&token).await.and_then(|response| {
                        session::login::establish_session(
                            &app.store,
                            response,
                            session::LoginKind::Federated,
                            &app.config,
                        )
                    });
                    in_flight.finish();
                    match outcome {
                        Ok(profile) => {
                            let landing = profile
                                .role()
                                .map_or("/", |role| role.landing_path(&app.config))
                                .to_owned();
                            auth.set(crate::state::auth::AuthState::from_profile(Some(profile)));
                            navigate(&landing, leptos_router::NavigateOptions { replace: true, ..Default::default() });
                        }
                        Err(e) => {
                            log::info!("federated login failed: {e}");
                            let message = e.user_message();
                            crate::util::auth::notify_blocking(&message);
                            info.set(message);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = token;
            }
        }
    }

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Bloom"</h1>
                <p class="login-message">{move || info.get()}</p>
                <a href="/login" class="login-link">"Back to sign in"</a>
            </div>
        </div>
    }
}
