//! API error type rendered as the standard response envelope.
//!
//! ERROR HANDLING
//! ==============
//! Handlers return `ApiResult<T>` and propagate with `?`. Every failure is
//! turned into an envelope with `isError: true`; internal and upstream
//! details are logged and replaced with a generic message so backend
//! internals never reach the browser.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventkit::Envelope;
use eventkit::fields::MappingError;
use eventkit::theme::ThemeError;

use crate::services::backend::BackendError;

pub type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::Unauthorized(msg) | Self::Unavailable(msg) => msg.clone(),
            Self::Upstream(_) => "Upstream service request failed".to_owned(),
            Self::Internal(_) => "Internal server error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(detail) => tracing::error!(error = %detail, "request failed"),
            Self::Upstream(detail) => tracing::error!(error = %detail, "upstream request failed"),
            _ => tracing::debug!(status = status.as_u16(), error = %self, "request rejected"),
        }
        let body: Envelope<()> = Envelope::error(status.as_u16(), self.public_message());
        (status, Json(body)).into_response()
    }
}

impl From<MappingError> for ApiError {
    fn from(err: MappingError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ThemeError> for ApiError {
    fn from(err: ThemeError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Rejected(msg) => Self::Unauthorized(msg),
            BackendError::Transport(msg) | BackendError::Malformed(msg) => Self::Upstream(msg),
        }
    }
}

/// Wrap `result` in a 200 envelope.
pub fn ok<T>(message: &str, result: T) -> ApiResult<T> {
    Ok(Json(Envelope::ok(message, result)))
}

/// Trim `raw` and reject it when missing or blank.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] naming `field` when the value is absent.
pub fn require(raw: Option<&str>, field: &str) -> Result<String, ApiError> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))
}
