//! Route wrapper that runs the session gate before rendering its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route mounts its own `ProtectedRoute`, so the gate runs
//! once per navigation. Evaluation waits for any in-flight login to finish
//! writing the credential; a denial clears the session keys and replaces the
//! current history entry with the login page.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use session::GateState;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let app = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(GateState::Checking);
    let path = use_location().pathname.get_untracked();
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        app.signal.settled().await;
        let mut next = state.get_untracked();
        let redirect = app.gate.resolve(&mut next, &app.store, &path);
        state.set(next);
        if let Some(login_path) = redirect {
            auth.set(AuthState::default());
            navigate(
                &login_path,
                leptos_router::NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (app, auth, path, navigate);
    }

    view! {
        <Show
            when=move || state.get() == GateState::Allowed
            fallback=|| view! { <div class="gate-checking">"Checking your session..."</div> }
        >
            {children()}
        </Show>
    }
}
