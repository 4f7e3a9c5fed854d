//! Session restore from cookies on first mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the app root, inside the router but outside the routes, so
//! it reads the tenant identifier from the URL path rather than route params.
//! It settles the loading session exactly once: `restore` when the cookies
//! hold a usable token and user record, `finish_loading` otherwise. Token
//! freshness is not checked here.

#[cfg(test)]
#[path = "auth_restorer_test.rs"]
mod auth_restorer_test;

use eventkit::{Session, restore};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::use_session;
use crate::util::cookies;

/// First path segment, taken as the tenant identifier.
pub fn route_identifier(path: &str) -> Option<&str> {
    path.trim_start_matches('/').split('/').next().filter(|s| !s.is_empty())
}

#[component]
pub fn AuthRestorer() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    // Effects only run after hydration, so SSR always renders the loading state.
    Effect::new(move || {
        if !session.with_untracked(Session::is_loading) {
            return;
        }
        let path = location.pathname.get_untracked();
        let jar = cookies::read_jar();
        match restore::plan_restore(&jar, route_identifier(&path)) {
            Some(plan) => session.update(|s| s.restore(&plan.identifier, plan.user)),
            None => session.update(Session::finish_loading),
        }
    });
}
