//! Upstream auth backend client.
//!
//! ARCHITECTURE
//! ============
//! Credentials are verified by an external event backend; this server only
//! forwards them and turns the grant into session cookies. The `AuthBackend`
//! trait keeps the HTTP client swappable so route tests can run without a
//! network.

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use std::time::Duration;

use eventkit::{Envelope, SessionUser};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Credentials forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub email: String,
    pub password: String,
}

/// Tokens and identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend refused the credentials.
    #[error("login rejected: {0}")]
    Rejected(String),
    #[error("backend request failed: {0}")]
    Transport(String),
    #[error("unexpected backend response: {0}")]
    Malformed(String),
}

/// Anything that can exchange credentials for a [`LoginGrant`].
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns [`BackendError::Rejected`] for bad credentials and
    /// transport/parse variants for everything else.
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, BackendError>;
}

/// `reqwest` implementation posting to `{base_url}/auth/login`.
pub struct HttpAuthBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthBackend {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into() })
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }
}

/// Interpret an upstream status + body as a login outcome.
pub(crate) fn interpret_login_response(status: u16, body: &str) -> Result<LoginGrant, BackendError> {
    let envelope: Option<Envelope<LoginGrant>> = serde_json::from_str(body).ok();

    if status == 401 || status == 403 {
        let message = envelope.map_or_else(|| "invalid credentials".to_owned(), |e| e.message);
        return Err(BackendError::Rejected(message));
    }
    if !(200..300).contains(&status) {
        return Err(BackendError::Transport(format!("status {status}")));
    }

    let envelope = envelope.ok_or_else(|| BackendError::Malformed(truncate(body, 200)))?;
    if envelope.is_error {
        let message = envelope.response_exception.unwrap_or(envelope.message);
        return Err(BackendError::Rejected(message));
    }
    envelope.result.ok_or_else(|| BackendError::Malformed("missing result".to_owned()))
}

fn truncate(raw: &str, max: usize) -> String {
    raw.chars().take(max).collect()
}

#[async_trait::async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, BackendError> {
        let resp = self
            .http
            .post(self.login_url())
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        interpret_login_response(status, &body)
    }
}
