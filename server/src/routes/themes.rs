//! Theme and font catalogs plus per-event theme customization.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use eventkit::theme::{EventTheme, FONTS, FontOption, THEMES, ThemeOverrides, ThemePreset};
use serde::Deserialize;

use super::fields::IdentifierQuery;
use crate::error::{self, ApiError, ApiResult};
use crate::state::AppState;

/// `GET /api/themes`
pub async fn available_themes() -> ApiResult<Vec<ThemePreset>> {
    error::ok("Themes fetched", THEMES.to_vec())
}

/// `GET /api/fonts`
pub async fn available_fonts() -> ApiResult<Vec<FontOption>> {
    error::ok("Fonts fetched", FONTS.to_vec())
}

/// `GET /api/event-theme?identifier=`: effective theme for one event.
pub async fn event_theme(State(state): State<AppState>, Query(query): Query<IdentifierQuery>) -> ApiResult<EventTheme> {
    let identifier = error::require(query.identifier.as_deref(), "identifier")?;
    let theme = state.themes.resolve(&identifier).await;
    error::ok("Event theme fetched", theme)
}

#[derive(Debug, Default, Deserialize)]
pub struct SaveThemeBody {
    #[serde(default)]
    identifier: Option<String>,
    #[serde(flatten)]
    overrides: ThemeOverrides,
}

/// `PUT /api/event-theme`: store overrides for one event.
pub async fn save_event_theme(
    State(state): State<AppState>,
    body: Result<Json<SaveThemeBody>, JsonRejection>,
) -> ApiResult<EventTheme> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let identifier = error::require(body.identifier.as_deref(), "identifier")?;
    let theme = state.themes.save(&identifier, body.overrides).await?;
    tracing::info!(%identifier, theme = %theme.theme_key, customized = theme.customized, "event theme saved");
    error::ok("Event theme saved", theme)
}

#[cfg(test)]
#[path = "themes_test.rs"]
mod tests;
