//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::session_header::SessionHeader;
use crate::pages::{
    admin::AdminPage, federated::FederatedLoginPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    staff::StaffPage,
};
use crate::state::auth::AuthState;
use crate::state::session::AppSession;

/// Root application component.
///
/// Provides the session handles and auth snapshot, then sets up client-side
/// routing. Every route except the login pages is wrapped in `ProtectedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = AppSession::new();
    let auth = RwSignal::new(AuthState::from_profile(app.store.profile()));

    provide_context(app);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/bloom.css"/>
        <Title text="Bloom"/>

        <Router>
            <SessionHeader/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("login"), StaticSegment("federated")) view=FederatedLoginPage/>
                    <Route path=StaticSegment("") view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("admin") view=|| view! { <ProtectedRoute><AdminPage/></ProtectedRoute> }/>
                    <Route
                        path=(StaticSegment("admin"), WildcardSegment("section"))
                        view=|| view! { <ProtectedRoute><AdminPage/></ProtectedRoute> }
                    />
                    <Route path=StaticSegment("staff") view=|| view! { <ProtectedRoute><StaffPage/></ProtectedRoute> }/>
                    <Route
                        path=(StaticSegment("staff"), WildcardSegment("section"))
                        view=|| view! { <ProtectedRoute><StaffPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
