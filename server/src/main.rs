mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::services::backend::{AuthBackend, HttpAuthBackend};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;

    // Login is disabled when no upstream backend is configured.
    let backend: Option<Arc<dyn AuthBackend>> = match config.backend_api_url.as_deref() {
        Some(url) => match HttpAuthBackend::new(url) {
            Ok(client) => {
                tracing::info!(backend = url, "auth backend configured");
                Some(Arc::new(client) as Arc<dyn AuthBackend>)
            }
            Err(e) => {
                tracing::warn!(error = %e, "auth backend client failed to build; login disabled");
                None
            }
        },
        None => {
            tracing::warn!("BACKEND_API_URL not set; login disabled");
            None
        }
    };

    let state = state::AppState::new(config, backend);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos frontend unavailable; serving API only");
            routes::api_app(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "eventdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
