use super::*;
use eventkit::Role;
use eventkit::theme::ThemeMode;

#[test]
fn with_identifier_encodes_reserved_characters() {
    assert_eq!(with_identifier("/api/event-theme", "expo-2025"), "/api/event-theme?identifier=expo-2025");
    assert_eq!(with_identifier("/api/event-theme", "a b&c"), "/api/event-theme?identifier=a%20b%26c");
}

#[test]
fn with_identifier_encodes_utf8_bytes_and_keeps_unreserved() {
    assert_eq!(with_identifier("/api/event-theme", "café"), "/api/event-theme?identifier=caf%C3%A9");
    assert_eq!(with_identifier("/api/event-theme", "a.b_c~d"), "/api/event-theme?identifier=a.b_c~d");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "request failed: 502");
}

#[test]
fn theme_payload_flattens_overrides() {
    let overrides = ThemeOverrides {
        theme_key: Some("forest".to_owned()),
        mode: Some(ThemeMode::Dark),
        ..ThemeOverrides::default()
    };
    let json = serde_json::to_value(ThemePayload { identifier: "expo", overrides: &overrides }).unwrap();
    assert_eq!(json["identifier"], "expo");
    assert_eq!(json["themeKey"], "forest");
    assert_eq!(json["mode"], "dark");
}

#[test]
fn login_outcome_decodes_server_result() {
    let raw = r#"{"identifier":"expo","user":{"id":"u1","email":"a@b.c","role":"visitor"},
                  "firstLogin":true,"redirectTo":"/expo/event-admin/visitors"}"#;
    let outcome: LoginOutcome = serde_json::from_str(raw).unwrap();
    assert_eq!(outcome.user.role, Role::Visitor);
    assert!(outcome.first_login);
    assert_eq!(outcome.redirect_to, "/expo/event-admin/visitors");
}

#[test]
fn submit_outcome_decodes_camel_case() {
    let raw = r#"{"identifier":"expo","mappedCount":1,"mappings":[{"sourceHeader":"E-mail","standardField":"email"}]}"#;
    let outcome: SubmitOutcome = serde_json::from_str(raw).unwrap();
    assert_eq!(outcome.mapped_count, 1);
    assert_eq!(outcome.mappings[0].standard_field, "email");
}

