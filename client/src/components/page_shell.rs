//! Guarded page chrome: header, role-aware navigation, logout, event theme.

#[cfg(test)]
#[path = "page_shell_test.rs"]
mod page_shell_test;

use eventkit::{PageAccess, Role, Session};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::route_guard::RouteGuard;
use crate::state::auth::use_session;
use crate::util::{cookies, storage_cleanup};

/// Pages a role may open, in navigation order.
pub fn visible_pages(role: &Role) -> Vec<PageAccess> {
    PageAccess::ALL.into_iter().filter(|page| page.allowed_roles().contains(role)).collect()
}

pub fn page_label(page: PageAccess) -> &'static str {
    match page {
        PageAccess::Dashboard => "Dashboard",
        PageAccess::Exhibitors => "Exhibitors",
        PageAccess::Visitors => "Visitors",
        PageAccess::ThemeSettings => "Theme",
        PageAccess::FieldMapping => "Field Mapping",
    }
}

/// Event the session was restored for, when it differs from the routed one.
pub fn foreign_event<'a>(session: &'a Session, route_identifier: &str) -> Option<&'a str> {
    session.identifier().filter(|id| !route_identifier.is_empty() && *id != route_identifier)
}

/// Wrap `children` in the route guard for `page` and the shared header.
#[component]
pub fn PageShell(page: PageAccess, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let identifier = move || params.read().get("identifier").unwrap_or_default();

    // Load and apply the event theme whenever the tenant changes.
    Effect::new(move || {
        let identifier = identifier();
        if identifier.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_event_theme(&identifier).await {
                Ok(theme) => crate::util::theme::apply(&theme),
                Err(e) => log::warn!("event theme unavailable for {identifier}: {e}"),
            }
        });
    });

    let on_logout = move |_| {
        cookies::expire_session_cookies();
        storage_cleanup::clear_prefixed(&[storage_cleanup::APP_PREFIX]);
        // The guard sees the signed-out session and redirects to the login page.
        session.update(Session::logout);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::api::logout());
    };

    let nav = move || {
        let id = identifier();
        let pages = session.with(|s| s.role().map(visible_pages).unwrap_or_default());
        pages
            .into_iter()
            .map(|p| {
                let class = if p == page { "page-nav__link page-nav__link--active" } else { "page-nav__link" };
                view! { <a class=class href=p.path(&id)>{page_label(p)}</a> }
            })
            .collect_view()
    };
    let other_event = move || {
        let id = identifier();
        session.with(|s| foreign_event(s, &id).map(str::to_owned)).map(|other| {
            view! { <p class="page-header__notice">{format!("Signed in for {other}")}</p> }
        })
    };
    let email = move || session.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <RouteGuard allowed=page.allowed_roles()>
            <header class="page-header">
                <span class="page-header__event">{identifier}</span>
                <nav class="page-nav">{nav}</nav>
                {other_event}
                <span class="page-header__user">{email}</span>
                <button class="page-header__logout" on:click=on_logout>"Log out"</button>
            </header>
            <main class="page-body">
                <h1>{page_label(page)}</h1>
                {children()}
            </main>
        </RouteGuard>
    }
}
