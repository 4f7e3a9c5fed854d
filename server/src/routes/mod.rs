//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. API routes live under `/api`; every other
//! path is handled by the Leptos app (`/{identifier}` login and the
//! `/{identifier}/event-admin/*` pages).

pub mod auth;
pub mod fields;
pub mod themes;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes shared by the SSR app and browser fetches.
pub fn api_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/standard-fields", get(fields::standard_fields))
        .route("/api/field-mapping", post(fields::submit))
        .route("/api/field-mapping/suggest", post(fields::suggest))
        .route("/api/event-theme", get(themes::event_theme).put(themes::save_event_theme))
        .route("/api/themes", get(themes::available_themes))
        .route("/api/fonts", get(themes::available_fonts))
        .route("/healthz", get(healthz));

    let router = if state.config.cors_allow_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    };

    router.with_state(state)
}

/// API routes with request tracing and compression, without the SSR frontend.
pub fn api_app(state: AppState) -> Router {
    api_routes(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
