//! Event-admin dashboard linking to the admin tools.

use eventkit::PageAccess;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_shell::{PageShell, page_label};
use crate::state::auth::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();

    let cards = move || {
        let identifier = params.read().get("identifier").unwrap_or_default();
        PageAccess::ALL
            .into_iter()
            .filter(|p| *p != PageAccess::Dashboard)
            .map(|p| {
                view! {
                    <a class="dashboard-card" href=p.path(&identifier)>
                        <span class="dashboard-card__title">{page_label(p)}</span>
                    </a>
                }
            })
            .collect_view()
    };
    let greeting = move || session.with(|s| s.user().map(|u| format!("Signed in as {}", u.email)).unwrap_or_default());

    view! {
        <PageShell page=PageAccess::Dashboard>
            <p class="dashboard-greeting">{greeting}</p>
            <div class="dashboard-grid">{cards}</div>
        </PageShell>
    }
}
