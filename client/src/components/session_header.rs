//! Header showing who is logged in, with a logout action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;

#[component]
pub fn SessionHeader() -> impl IntoView {
    let app = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    crate::util::auth::install_storage_sync(auth, app.clone());

    let on_logout = move |_| {
        let token = app.store.token();
        session::login::logout(&app.store);
        auth.set(AuthState::default());

        #[cfg(feature = "csr")]
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&token).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = token;

        navigate(&app.config.login_path, leptos_router::NavigateOptions::default());
    };

    let logged_out = move || !auth.get().is_logged_in();

    view! {
        <header class="session-header">
            <a href="/" class="session-header__brand">"Bloom"</a>
            <a href="/login" class="session-header__login" hidden=move || !logged_out()>
                "Log in"
            </a>
            <span class="session-header__name" hidden=logged_out>
                {move || auth.get().display_name().unwrap_or_default()}
            </span>
            <button class="session-header__logout" hidden=logged_out on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
