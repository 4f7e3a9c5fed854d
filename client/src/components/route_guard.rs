//! Role-based route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps page content. On every session change it evaluates
//! `eventkit::guard::decide` against the page's allow-list and the route's
//! `identifier` parameter:
//!
//! - `Loading`: spinner, children not rendered.
//! - `Redirect`: replace-navigation fired from an effect; nothing rendered.
//! - `Render`: children rendered unchanged.
//!
//! Navigation is fire-and-forget; there is no retry.

use eventkit::{GuardOutcome, Role, guard};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::use_session;

#[component]
pub fn RouteGuard(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let identifier = params.read().get("identifier").unwrap_or_default();
        session.with(|s| guard::decide(s, allowed, &identifier))
    });

    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = outcome.get() {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        GuardOutcome::Loading => view! {
            <div class="route-guard__loading" role="progressbar" aria-busy="true">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        GuardOutcome::Redirect(_) => ().into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}
