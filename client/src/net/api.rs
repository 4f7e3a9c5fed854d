//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint answers with the shared `Envelope`. Helpers unwrap it into
//! `Result<T, String>` so pages can show the server's message without
//! panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use eventkit::SessionUser;
use eventkit::fields::{FieldMapping, HeaderSuggestion};
use eventkit::theme::{EventTheme, ThemeOverrides};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// `result` of a successful `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub identifier: String,
    pub user: SessionUser,
    pub first_login: bool,
    pub redirect_to: String,
}

/// `result` of `POST /api/field-mapping/suggest`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestOutcome {
    pub identifier: String,
    pub file_name: Option<String>,
    pub suggestions: Vec<HeaderSuggestion>,
}

/// `result` of `POST /api/field-mapping`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub identifier: String,
    pub mapped_count: usize,
    pub mappings: Vec<FieldMapping>,
}

#[derive(Debug, Serialize)]
struct LoginPayload<'a> {
    identifier: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ThemePayload<'a> {
    identifier: &'a str,
    #[serde(flatten)]
    overrides: &'a ThemeOverrides,
}

#[derive(Debug, Serialize)]
struct SubmitPayload<'a> {
    identifier: &'a str,
    mappings: &'a [FieldMapping],
}

/// Query-value encoding: everything but RFC 3986 unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// `path?identifier=<encoded>`.
fn with_identifier(path: &str, identifier: &str) -> String {
    format!("{path}?identifier={}", utf8_percent_encode(identifier, QUERY_VALUE))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

/// Decode an envelope body, falling back to the HTTP status when the body
/// is not an envelope.
#[cfg(feature = "hydrate")]
async fn read_envelope<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    let status = resp.status();
    let envelope: eventkit::Envelope<T> = resp.json().await.map_err(|_| request_failed_message(status))?;
    if envelope.is_error {
        return Err(envelope.message);
    }
    envelope.into_result()
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize, T: serde::de::DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<T, String> {
    let resp = builder
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope(resp).await
}

/// Sign in via `POST /api/auth/login`. The server sets the session cookies.
///
/// # Errors
///
/// Returns the server's message for rejected credentials or a transport error string.
pub async fn login(identifier: &str, email: &str, password: &str) -> Result<LoginOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginPayload { identifier, email, password };
        send_json(gloo_net::http::Request::post("/api/auth/login"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LoginPayload { identifier, email, password };
        unavailable()
    }
}

/// Log out by calling `POST /api/auth/logout`, which expires the session cookies.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the effective theme from `GET /api/event-theme`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server answers with an error envelope.
pub async fn fetch_event_theme(identifier: &str) -> Result<EventTheme, String> {
    let url = with_identifier("/api/event-theme", identifier);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        unavailable()
    }
}

/// Store theme overrides via `PUT /api/event-theme`.
///
/// # Errors
///
/// Returns the server's validation message or a transport error string.
pub async fn save_event_theme(identifier: &str, overrides: &ThemeOverrides) -> Result<EventTheme, String> {
    let payload = ThemePayload { identifier, overrides };
    #[cfg(feature = "hydrate")]
    {
        send_json(gloo_net::http::Request::put("/api/event-theme"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        unavailable()
    }
}

/// Upload a file to `POST /api/field-mapping/suggest` as multipart form data.
///
/// # Errors
///
/// Returns the server's message (missing file, non-CSV content) or a transport error string.
#[cfg(feature = "hydrate")]
pub async fn suggest_mapping(identifier: &str, file: &web_sys::File) -> Result<SuggestOutcome, String> {
    let form = web_sys::FormData::new().map_err(|_| "form data unavailable".to_owned())?;
    form.append_with_str("identifier", identifier).map_err(|_| "form data rejected identifier".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "form data rejected file".to_owned())?;
    let resp = gloo_net::http::Request::post("/api/field-mapping/suggest")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope(resp).await
}

/// Submit the confirmed mapping set via `POST /api/field-mapping`.
///
/// # Errors
///
/// Returns the server's validation message or a transport error string.
pub async fn submit_mapping(identifier: &str, mappings: &[FieldMapping]) -> Result<SubmitOutcome, String> {
    let payload = SubmitPayload { identifier, mappings };
    #[cfg(feature = "hydrate")]
    {
        send_json(gloo_net::http::Request::post("/api/field-mapping"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        unavailable()
    }
}
