//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed configuration, the optional upstream auth backend,
//! and the per-event theme store.

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::backend::AuthBackend;
use crate::services::theme_store::ThemeStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Upstream credential check. `None` disables login.
    pub backend: Option<Arc<dyn AuthBackend>>,
    pub themes: ThemeStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, backend: Option<Arc<dyn AuthBackend>>) -> Self {
        Self { config: Arc::new(config), backend, themes: ThemeStore::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use eventkit::{Role, SessionUser};

    use super::*;
    use crate::services::backend::{BackendError, LoginGrant, LoginRequest};

    /// Backend that returns a canned outcome and records requests.
    pub struct MockBackend {
        pub outcome: Result<LoginGrant, BackendError>,
        pub requests: Mutex<Vec<LoginRequest>>,
    }

    #[async_trait::async_trait]
    impl AuthBackend for MockBackend {
        async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, BackendError> {
            self.requests.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    #[must_use]
    pub fn grant(role: Role) -> LoginGrant {
        LoginGrant {
            token: "tok-1".to_owned(),
            refresh_token: Some("ref-1".to_owned()),
            user: SessionUser { id: "u1".to_owned(), email: "user@example.com".to_owned(), role },
        }
    }

    /// `AppState` with default config and no backend.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(ServerConfig::default(), None)
    }

    /// `AppState` whose backend always returns `outcome`.
    #[must_use]
    pub fn test_app_state_with_backend(outcome: Result<LoginGrant, BackendError>) -> (AppState, Arc<MockBackend>) {
        let backend = Arc::new(MockBackend { outcome, requests: Mutex::new(Vec::new()) });
        let shared: Arc<dyn AuthBackend> = backend.clone();
        let state = AppState::new(ServerConfig::default(), Some(shared));
        (state, backend)
    }
}
