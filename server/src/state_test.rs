use eventkit::Role;

use super::test_helpers::*;
use super::*;

#[test]
fn default_state_has_no_backend() {
    let state = test_app_state();
    assert!(state.backend.is_none());
    assert_eq!(state.config.port, 3000);
}

#[tokio::test]
async fn clones_share_theme_store() {
    let state = test_app_state();
    let clone = state.clone();
    let overrides = eventkit::theme::ThemeOverrides { theme_key: Some("slate".to_owned()), ..Default::default() };
    clone.themes.save("expo", overrides).await.unwrap();
    assert_eq!(state.themes.resolve("expo").await.theme_key, "slate");
}

#[tokio::test]
async fn mock_backend_records_requests() {
    let (state, mock) = test_app_state_with_backend(Ok(grant(Role::Visitor)));
    let request = crate::services::backend::LoginRequest {
        identifier: "expo".to_owned(),
        email: "v@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    let backend = state.backend.clone().unwrap();
    let granted = backend.login(&request).await.unwrap();
    assert_eq!(granted.user.role, Role::Visitor);
    assert_eq!(mock.requests.lock().unwrap().len(), 1);
}
