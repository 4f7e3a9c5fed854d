use eventkit::theme::ThemeMode;

use super::*;

#[tokio::test]
async fn unknown_event_resolves_to_default() {
    let store = ThemeStore::new();
    let theme = store.resolve("expo").await;
    assert_eq!(theme.theme_key, "classic");
    assert!(!theme.customized);
}

#[tokio::test]
async fn save_then_resolve_returns_overrides() {
    let store = ThemeStore::new();
    let overrides = ThemeOverrides {
        theme_key: Some("forest".to_owned()),
        primary_color: Some("#123456".to_owned()),
        ..ThemeOverrides::default()
    };
    let saved = store.save("expo", overrides).await.unwrap();
    assert_eq!(saved.primary_color, "#123456");

    let resolved = store.resolve("expo").await;
    assert_eq!(resolved, saved);
    assert!(resolved.customized);
}

#[tokio::test]
async fn overrides_are_scoped_per_event() {
    let store = ThemeStore::new();
    let overrides = ThemeOverrides { mode: Some(ThemeMode::Dark), ..ThemeOverrides::default() };
    store.save("expo-a", overrides).await.unwrap();
    assert_eq!(store.resolve("expo-a").await.mode, ThemeMode::Dark);
    assert_eq!(store.resolve("expo-b").await.mode, ThemeMode::Light);
}

#[tokio::test]
async fn invalid_overrides_are_not_stored() {
    let store = ThemeStore::new();
    let overrides = ThemeOverrides { primary_color: Some("blue".to_owned()), ..ThemeOverrides::default() };
    assert!(store.save("expo", overrides).await.is_err());
    assert!(!store.resolve("expo").await.customized);
}

#[tokio::test]
async fn empty_overrides_reset_event() {
    let store = ThemeStore::new();
    let overrides = ThemeOverrides { theme_key: Some("slate".to_owned()), ..ThemeOverrides::default() };
    store.save("expo", overrides).await.unwrap();
    let reset = store.save("expo", ThemeOverrides::default()).await.unwrap();
    assert_eq!(reset.theme_key, "classic");
    assert!(!store.resolve("expo").await.customized);
}
