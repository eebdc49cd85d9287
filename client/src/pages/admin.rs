//! Admin area landing page. Reached only with the admin role.

use leptos::prelude::*;

pub(crate) const ADMIN_SECTIONS: [(&str, &str); 5] = [
    ("Packages", "/admin/packages"),
    ("Flowers", "/admin/flowers"),
    ("Bouquets", "/admin/bouquets"),
    ("Orders", "/admin/orders"),
    ("Reports", "/admin/reports"),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h2>"Administration"</h2>
            <ul class="admin-page__sections">
                {ADMIN_SECTIONS
                    .into_iter()
                    .map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
