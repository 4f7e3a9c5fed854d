//! Uniform JSON response wrapper used by every API endpoint.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "1.0";

/// `{version, statusCode, message, isError, responseException, result}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub version: String,
    pub status_code: u16,
    pub message: String,
    pub is_error: bool,
    pub response_exception: Option<String>,
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful 200 response carrying `result`.
    pub fn ok(message: impl Into<String>, result: T) -> Self {
        Self::success(200, message, result)
    }

    pub fn success(status_code: u16, message: impl Into<String>, result: T) -> Self {
        Self {
            version: API_VERSION.to_owned(),
            status_code,
            message: message.into(),
            is_error: false,
            response_exception: None,
            result: Some(result),
        }
    }

    /// Error response; `result` is always `null`.
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            version: API_VERSION.to_owned(),
            status_code,
            response_exception: Some(message.clone()),
            message,
            is_error: true,
            result: None,
        }
    }

    /// Unwrap the result, turning error envelopes into their message.
    ///
    /// # Errors
    ///
    /// Returns the envelope message when `is_error` is set or `result` is absent.
    pub fn into_result(self) -> Result<T, String> {
        if self.is_error {
            return Err(self.response_exception.unwrap_or(self.message));
        }
        self.result.ok_or(self.message)
    }
}
