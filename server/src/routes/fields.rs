//! Standard-field lookup and file-based field-mapping routes.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Query};
use axum::response::Json;
use eventkit::fields::{self, FieldMapping, HeaderSuggestion, STANDARD_FIELDS, StandardField};
use serde::{Deserialize, Serialize};

use crate::error::{self, ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct IdentifierQuery {
    #[serde(default)]
    pub identifier: Option<String>,
}

/// `GET /api/standard-fields?identifier=`: the standard-field catalog.
pub async fn standard_fields(Query(query): Query<IdentifierQuery>) -> ApiResult<Vec<StandardField>> {
    let identifier = error::require(query.identifier.as_deref(), "identifier")?;
    tracing::debug!(%identifier, "standard fields requested");
    error::ok("Standard fields fetched", STANDARD_FIELDS.to_vec())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResult {
    pub identifier: String,
    pub file_name: Option<String>,
    pub suggestions: Vec<HeaderSuggestion>,
}

struct UploadedFile {
    name: Option<String>,
    bytes: Vec<u8>,
}

/// `POST /api/field-mapping/suggest`: multipart `identifier` + `file`.
pub async fn suggest(multipart: Result<Multipart, MultipartRejection>) -> ApiResult<SuggestResult> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let mut identifier = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("identifier") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("invalid identifier field: {e}")))?;
                identifier = Some(text);
            }
            Some("file") => {
                let name = field.file_name().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("invalid file field: {e}")))?;
                file = Some(UploadedFile { name, bytes: bytes.to_vec() });
            }
            _ => {}
        }
    }

    let identifier = error::require(identifier.as_deref(), "identifier")?;
    let file = file.ok_or_else(|| ApiError::BadRequest("file is required".to_owned()))?;
    let text = String::from_utf8(file.bytes)
        .map_err(|_| ApiError::BadRequest("file must be UTF-8 encoded CSV text".to_owned()))?;

    let headers = fields::parse_header_row(&text);
    let suggestions = fields::suggest_mappings(&headers);
    tracing::info!(
        %identifier,
        headers = headers.len(),
        matched = suggestions.iter().filter(|s| s.suggested_field.is_some()).count(),
        "field mapping suggested"
    );
    error::ok("Field mapping suggestions generated", SuggestResult { identifier, file_name: file.name, suggestions })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBody {
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default)]
    mappings: Vec<FieldMapping>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResult {
    pub identifier: String,
    pub mapped_count: usize,
    pub mappings: Vec<FieldMapping>,
}

/// `POST /api/field-mapping`: validate and accept a mapping set.
pub async fn submit(body: Result<Json<SubmitBody>, JsonRejection>) -> ApiResult<SubmitResult> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let identifier = error::require(body.identifier.as_deref(), "identifier")?;
    fields::validate_mappings(&body.mappings)?;

    let mappings: Vec<FieldMapping> = body
        .mappings
        .into_iter()
        .map(|m| FieldMapping {
            source_header: m.source_header.trim().to_owned(),
            standard_field: m.standard_field.trim().to_owned(),
        })
        .collect();
    tracing::info!(%identifier, mapped = mappings.len(), "field mapping submitted");
    error::ok(
        "Field mapping saved",
        SubmitResult { identifier, mapped_count: mappings.len(), mappings },
    )
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
