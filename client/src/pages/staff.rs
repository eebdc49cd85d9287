//! Staff area landing page. Reached only with the staff role.

use leptos::prelude::*;

#[component]
pub fn StaffPage() -> impl IntoView {
    view! {
        <section class="staff-page">
            <h2>"Staff workspace"</h2>
            <ul class="staff-page__sections">
                <li><a href="/staff/orders">"Orders"</a></li>
            </ul>
        </section>
    }
}
