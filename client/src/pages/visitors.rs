//! Visitor area, open to visitors and event admins.

use eventkit::PageAccess;
use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::state::auth::use_session;

#[component]
pub fn VisitorsPage() -> impl IntoView {
    let session = use_session();
    let role = move || session.with(|s| s.role().map(ToString::to_string).unwrap_or_default());

    view! {
        <PageShell page=PageAccess::Visitors>
            <section class="panel">
                <p>"Agenda, exhibitor directory, and badge information for this event."</p>
                <p class="panel__meta">"Role: " {role}</p>
            </section>
        </PageShell>
    }
}
