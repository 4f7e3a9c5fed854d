//! Per-tenant login page at `/{identifier}`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::{landing_path, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();
    let identifier = move || params.read().get("identifier").unwrap_or_default();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (restored from cookies or just logged in): go to the role's page.
    Effect::new(move || {
        if let Some(path) = session.with(|s| landing_path(s, &identifier())) {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let identifier_value = identifier();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&identifier_value, &email_value, &password_value).await {
                Ok(outcome) => {
                    info.set(String::new());
                    // The landing effect navigates once the session flips to authenticated.
                    session.update(|s| s.login(outcome.user));
                }
                Err(e) => info.set(format!("Sign in failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (identifier_value, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EventDesk"</h1>
                <p class="login-card__subtitle">{identifier}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
