use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "No"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    assert_eq!(config_from(&[]).unwrap(), ServerConfig::default());
}

#[test]
fn port_is_parsed() {
    assert_eq!(config_from(&[("PORT", "8080")]).unwrap().port, 8080);
}

#[test]
fn bad_port_is_an_error() {
    assert_eq!(config_from(&[("PORT", "eighty")]), Err(ConfigError::InvalidPort("eighty".to_owned())));
}

#[test]
fn backend_url_trailing_slash_stripped() {
    let config = config_from(&[("BACKEND_API_URL", "http://backend.local/api/")]).unwrap();
    assert_eq!(config.backend_api_url.as_deref(), Some("http://backend.local/api"));
}

#[test]
fn blank_backend_url_is_none() {
    assert!(config_from(&[("BACKEND_API_URL", "  ")]).unwrap().backend_api_url.is_none());
}

#[test]
fn cookie_secure_inferred_from_https_backend() {
    assert!(config_from(&[("BACKEND_API_URL", "https://backend.example")]).unwrap().cookie_secure);
    assert!(!config_from(&[("BACKEND_API_URL", "http://localhost:9000")]).unwrap().cookie_secure);
}

#[test]
fn explicit_cookie_secure_wins() {
    let config = config_from(&[("BACKEND_API_URL", "https://backend.example"), ("COOKIE_SECURE", "off")]).unwrap();
    assert!(!config.cookie_secure);
}

#[test]
fn invalid_bool_is_an_error() {
    assert_eq!(
        config_from(&[("CORS_ALLOW_ANY", "sometimes")]),
        Err(ConfigError::InvalidBool { key: "CORS_ALLOW_ANY", value: "sometimes".to_owned() })
    );
}
