use super::*;

#[test]
fn default_theme_is_first_in_catalog() {
    assert_eq!(THEMES[0].key, DEFAULT_THEME_KEY);
}

#[test]
fn every_preset_font_exists() {
    for preset in THEMES {
        assert!(font_option(preset.font_key).is_some(), "{} uses unknown font {}", preset.key, preset.font_key);
        assert!(is_hex_color(preset.primary_color));
        assert!(is_hex_color(preset.secondary_color));
    }
}

#[test]
fn hex_color_validation() {
    assert!(is_hex_color("#1a2B3c"));
    assert!(!is_hex_color("1a2b3c"));
    assert!(!is_hex_color("#1a2b3"));
    assert!(!is_hex_color("#1a2b3g"));
    assert!(!is_hex_color("#1a2b3c4"));
}

#[test]
fn resolve_without_overrides_uses_classic() {
    let theme = resolve("expo", None);
    assert_eq!(theme.identifier, "expo");
    assert_eq!(theme.theme_key, "classic");
    assert_eq!(theme.font_family, "Roboto");
    assert_eq!(theme.mode, ThemeMode::Light);
    assert!(!theme.customized);
}

#[test]
fn resolve_layers_overrides_over_preset() {
    let overrides = ThemeOverrides {
        theme_key: Some("midnight".to_owned()),
        primary_color: Some("#FF0000".to_owned()),
        font_key: Some("playfair".to_owned()),
        ..ThemeOverrides::default()
    };
    let theme = resolve("expo", Some(&overrides));
    assert_eq!(theme.theme_key, "midnight");
    assert_eq!(theme.primary_color, "#FF0000");
    assert_eq!(theme.secondary_color, "#F48FB1");
    assert_eq!(theme.background_color, "#121212");
    assert_eq!(theme.font_family, "Playfair Display");
    assert_eq!(theme.mode, ThemeMode::Dark);
    assert!(theme.customized);
}

#[test]
fn resolve_mode_override_wins() {
    let overrides = ThemeOverrides { mode: Some(ThemeMode::Dark), ..ThemeOverrides::default() };
    let theme = resolve("expo", Some(&overrides));
    assert_eq!(theme.theme_key, "classic");
    assert_eq!(theme.mode, ThemeMode::Dark);
}

#[test]
fn mode_override_switches_surface_colors() {
    let overrides = ThemeOverrides { mode: Some(ThemeMode::Dark), ..ThemeOverrides::default() };
    let theme = resolve("expo", Some(&overrides));
    assert_eq!((theme.background_color.as_str(), theme.text_color.as_str()), ThemeMode::Dark.surface());

    let overrides = ThemeOverrides {
        theme_key: Some("midnight".to_owned()),
        mode: Some(ThemeMode::Light),
        ..ThemeOverrides::default()
    };
    let theme = resolve("expo", Some(&overrides));
    assert_eq!(theme.background_color, "#FFFFFF");
    assert_eq!(theme.text_color, "#212121");
}

#[test]
fn mode_matching_preset_keeps_preset_surface() {
    let overrides = ThemeOverrides {
        theme_key: Some("forest".to_owned()),
        mode: Some(ThemeMode::Light),
        ..ThemeOverrides::default()
    };
    let theme = resolve("expo", Some(&overrides));
    assert_eq!(theme.background_color, "#F1F8E9");
}

#[test]
fn resolve_unknown_keys_fall_back() {
    let overrides = ThemeOverrides {
        theme_key: Some("neon".to_owned()),
        font_key: Some("comic".to_owned()),
        ..ThemeOverrides::default()
    };
    let theme = resolve("expo", Some(&overrides));
    assert_eq!(theme.theme_key, "classic");
    assert_eq!(theme.font_key, "roboto");
}

#[test]
fn empty_overrides_are_not_customized() {
    let theme = resolve("expo", Some(&ThemeOverrides::default()));
    assert!(!theme.customized);
}

#[test]
fn validate_rejects_unknown_theme_font_and_bad_color() {
    let bad_theme = ThemeOverrides { theme_key: Some("neon".to_owned()), ..ThemeOverrides::default() };
    assert_eq!(bad_theme.validate(), Err(ThemeError::UnknownTheme("neon".to_owned())));

    let bad_font = ThemeOverrides { font_key: Some("comic".to_owned()), ..ThemeOverrides::default() };
    assert_eq!(bad_font.validate(), Err(ThemeError::UnknownFont("comic".to_owned())));

    let bad_color = ThemeOverrides { secondary_color: Some("red".to_owned()), ..ThemeOverrides::default() };
    assert_eq!(bad_color.validate(), Err(ThemeError::InvalidColor("red".to_owned())));
}

#[test]
fn validate_accepts_catalog_values() {
    let overrides = ThemeOverrides {
        theme_key: Some("forest".to_owned()),
        primary_color: Some("#00aa00".to_owned()),
        secondary_color: None,
        font_key: Some("lato".to_owned()),
        mode: Some(ThemeMode::Light),
    };
    assert_eq!(overrides.validate(), Ok(()));
}

#[test]
fn overrides_deserialize_from_partial_camel_case_json() {
    let overrides: ThemeOverrides = serde_json::from_str(r#"{"themeKey":"slate","mode":"dark"}"#).unwrap();
    assert_eq!(overrides.theme_key.as_deref(), Some("slate"));
    assert_eq!(overrides.mode, Some(ThemeMode::Dark));
    assert!(overrides.primary_color.is_none());
}
