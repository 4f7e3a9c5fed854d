//! Server configuration read from the environment.
//!
//! `.env` files are loaded by `main` through `dotenvy` before this runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid {key}: {value:?} is not a boolean")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the upstream auth backend. Login is disabled when unset.
    pub backend_api_url: Option<String>,
    pub cookie_secure: bool,
    pub cors_allow_any: bool,
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    /// Build from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or a boolean flag is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `BACKEND_API_URL`: upstream auth backend, trailing `/` stripped
    /// - `COOKIE_SECURE`: defaults to true when the backend URL is https
    /// - `CORS_ALLOW_ANY`: default false
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or a boolean flag is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let backend_api_url = lookup("BACKEND_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty());

        let bool_var = |key: &'static str| -> Result<Option<bool>, ConfigError> {
            lookup(key)
                .map(|value| parse_bool(&value).ok_or(ConfigError::InvalidBool { key, value }))
                .transpose()
        };

        let cookie_secure = bool_var("COOKIE_SECURE")?
            .unwrap_or_else(|| backend_api_url.as_deref().is_some_and(|url| url.starts_with("https://")));
        let cors_allow_any = bool_var("CORS_ALLOW_ANY")?.unwrap_or(false);

        Ok(Self { port, backend_api_url, cookie_secure, cors_allow_any })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, backend_api_url: None, cookie_secure: false, cors_allow_any: false }
    }
}
