//! Login page for username + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

pub(crate) const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields. Passwords are kept verbatim.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let app = expect_context::<crate::state::session::AppSession>();
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let app = app.clone();
            let navigate = navigate.clone();
            let in_flight = app.signal.begin();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&user, &pass).await.and_then(|response| {
                    session::login::establish_session(
                        &app.store,
                        response,
                        session::LoginKind::Password,
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
                        navigate(&landing, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::info!("login failed: {e}");
                        let message = e.user_message();
                        crate::util::auth::notify_blocking(&message);
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, pass);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Bloom"</h1>
                <p class="login-card__subtitle">"Fresh flowers, every week"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                {crate::util::config::federated_start_url().map(|href| {
                    view! {
                        <div class="login-divider"></div>
                        <p class="login-card__subtitle">"Or"</p>
                        <a href=href class="login-button login-button--google">
                            "Continue with Google"
                        </a>
                    }
                })}
            </div>
        </div>
    }
}
