//! Exhibitor area, open to exhibitors and event admins.

use eventkit::PageAccess;
use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::state::auth::use_session;

#[component]
pub fn ExhibitorsPage() -> impl IntoView {
    let session = use_session();
    let role = move || session.with(|s| s.role().map(ToString::to_string).unwrap_or_default());

    view! {
        <PageShell page=PageAccess::Exhibitors>
            <section class="panel">
                <p>"Booth details, lead capture, and exhibitor resources for this event."</p>
                <p class="panel__meta">"Role: " {role}</p>
            </section>
        </PageShell>
    }
}
