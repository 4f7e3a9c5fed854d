//! Theme and font catalogs plus per-event theme resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server stores one optional [`ThemeOverrides`] record per event and
//! serves the resolved [`EventTheme`]; the client applies it to the page
//! shell. Catalog entries are static lookup tables.

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Light or dark surface palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Default `(background, text)` colors for this mode.
    #[must_use]
    pub fn surface(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("#FFFFFF", "#212121"),
            Self::Dark => ("#121212", "#EEEEEE"),
        }
    }
}

/// A selectable base theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreset {
    pub key: &'static str,
    pub name: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub mode: ThemeMode,
    pub font_key: &'static str,
}

/// A selectable font family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOption {
    pub key: &'static str,
    pub family: &'static str,
    pub category: &'static str,
    pub weights: &'static [u16],
}

pub const DEFAULT_THEME_KEY: &str = "classic";

pub const THEMES: &[ThemePreset] = &[
    ThemePreset {
        key: "classic",
        name: "Classic",
        primary_color: "#1976D2",
        secondary_color: "#9C27B0",
        background_color: "#FFFFFF",
        text_color: "#212121",
        mode: ThemeMode::Light,
        font_key: "roboto",
    },
    ThemePreset {
        key: "midnight",
        name: "Midnight",
        primary_color: "#90CAF9",
        secondary_color: "#F48FB1",
        background_color: "#121212",
        text_color: "#EEEEEE",
        mode: ThemeMode::Dark,
        font_key: "inter",
    },
    ThemePreset {
        key: "forest",
        name: "Forest",
        primary_color: "#2E7D32",
        secondary_color: "#FFB300",
        background_color: "#F1F8E9",
        text_color: "#1B5E20",
        mode: ThemeMode::Light,
        font_key: "lato",
    },
    ThemePreset {
        key: "sunset",
        name: "Sunset",
        primary_color: "#E64A19",
        secondary_color: "#5E35B1",
        background_color: "#FFF3E0",
        text_color: "#3E2723",
        mode: ThemeMode::Light,
        font_key: "montserrat",
    },
    ThemePreset {
        key: "slate",
        name: "Slate",
        primary_color: "#546E7A",
        secondary_color: "#26A69A",
        background_color: "#263238",
        text_color: "#ECEFF1",
        mode: ThemeMode::Dark,
        font_key: "open-sans",
    },
];

pub const FONTS: &[FontOption] = &[
    FontOption { key: "roboto", family: "Roboto", category: "sans-serif", weights: &[300, 400, 500, 700] },
    FontOption { key: "inter", family: "Inter", category: "sans-serif", weights: &[400, 500, 600, 700] },
    FontOption { key: "lato", family: "Lato", category: "sans-serif", weights: &[300, 400, 700] },
    FontOption { key: "montserrat", family: "Montserrat", category: "sans-serif", weights: &[400, 600, 800] },
    FontOption { key: "open-sans", family: "Open Sans", category: "sans-serif", weights: &[400, 600, 700] },
    FontOption { key: "merriweather", family: "Merriweather", category: "serif", weights: &[300, 400, 700] },
    FontOption { key: "playfair", family: "Playfair Display", category: "serif", weights: &[400, 700] },
    FontOption { key: "fira-code", family: "Fira Code", category: "monospace", weights: &[400, 500] },
];

#[must_use]
pub fn theme_preset(key: &str) -> Option<&'static ThemePreset> {
    THEMES.iter().find(|t| t.key == key)
}

#[must_use]
pub fn font_option(key: &str) -> Option<&'static FontOption> {
    FONTS.iter().find(|f| f.key == key)
}

fn default_preset() -> &'static ThemePreset {
    &THEMES[0]
}

/// Per-event customization layered over a preset. `None` keeps the preset value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    #[serde(default)]
    pub theme_key: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub font_key: Option<String>,
    #[serde(default)]
    pub mode: Option<ThemeMode>,
}

/// Fully resolved theme for one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTheme {
    pub identifier: String,
    pub theme_key: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub mode: ThemeMode,
    pub font_key: String,
    pub font_family: String,
    /// Whether any override is stored for the event.
    pub customized: bool,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown font: {0}")]
    UnknownFont(String),
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),
}

/// `#RRGGBB` with hex digits of either case.
#[must_use]
pub fn is_hex_color(raw: &str) -> bool {
    raw.len() == 7 && raw.starts_with('#') && raw[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl ThemeOverrides {
    /// Check every present key and color against the catalogs.
    ///
    /// # Errors
    ///
    /// Returns the first [`ThemeError`] found.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if let Some(key) = &self.theme_key {
            theme_preset(key).ok_or_else(|| ThemeError::UnknownTheme(key.clone()))?;
        }
        if let Some(key) = &self.font_key {
            font_option(key).ok_or_else(|| ThemeError::UnknownFont(key.clone()))?;
        }
        for color in [&self.primary_color, &self.secondary_color].into_iter().flatten() {
            if !is_hex_color(color) {
                return Err(ThemeError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolve the effective theme: overrides, then preset, then `classic`.
///
/// Unknown keys in `overrides` fall back silently; callers validate before
/// storing. The preset's surface colors only apply in the preset's own mode;
/// a mode override switches to that mode's default surface.
#[must_use]
pub fn resolve(identifier: &str, overrides: Option<&ThemeOverrides>) -> EventTheme {
    let empty = ThemeOverrides::default();
    let ov = overrides.unwrap_or(&empty);
    let preset = ov.theme_key.as_deref().and_then(theme_preset).unwrap_or_else(default_preset);
    let font = ov
        .font_key
        .as_deref()
        .and_then(font_option)
        .or_else(|| font_option(preset.font_key))
        .unwrap_or(&FONTS[0]);
    let mode = ov.mode.unwrap_or(preset.mode);
    let (background_color, text_color) =
        if mode == preset.mode { (preset.background_color, preset.text_color) } else { mode.surface() };

    EventTheme {
        identifier: identifier.to_owned(),
        theme_key: preset.key.to_owned(),
        primary_color: ov.primary_color.clone().unwrap_or_else(|| preset.primary_color.to_owned()),
        secondary_color: ov.secondary_color.clone().unwrap_or_else(|| preset.secondary_color.to_owned()),
        background_color: background_color.to_owned(),
        text_color: text_color.to_owned(),
        mode,
        font_key: font.key.to_owned(),
        font_family: font.family.to_owned(),
        customized: overrides.is_some_and(|o| !o.is_empty()),
    }
}
