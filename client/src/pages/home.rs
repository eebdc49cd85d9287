//! Customer landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .display_name()
            .map_or_else(|| "Welcome".to_owned(), |name| format!("Welcome back, {name}"))
    };

    view! {
        <section class="home-page">
            <h2>{greeting}</h2>
            <nav class="home-page__links">
                <a href="/profile">"Your profile"</a>
            </nav>
        </section>
    }
}
