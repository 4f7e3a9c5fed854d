//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<Session>` is provided at the app root. The `AuthRestorer`
//! settles it from cookies, the login page and logout button drive the
//! `login`/`logout` transitions, and every `RouteGuard` reads it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use eventkit::{Session, guard};
use leptos::prelude::*;

/// Provide the session context, starting in the loading state.
pub fn provide_session() -> RwSignal<Session> {
    let session = RwSignal::new(Session::loading());
    provide_context(session);
    session
}

/// The session context provided by [`provide_session`].
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Where the login page should send an already-signed-in user, if anywhere.
///
/// Nothing happens while restoration is pending, when nobody is signed in,
/// or when the role has no page of its own (its default is the login page).
pub fn landing_path(session: &Session, identifier: &str) -> Option<String> {
    if session.is_loading() || !session.is_authenticated() {
        return None;
    }
    session
        .role()
        .map(|role| role.default_path(identifier))
        .filter(|path| *path != guard::login_path(identifier))
}
