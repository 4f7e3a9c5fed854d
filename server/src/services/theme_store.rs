//! In-process per-event theme overrides.
//!
//! TRADE-OFFS
//! ==========
//! Overrides live only for the lifetime of the process. Events without a
//! stored record resolve to their catalog defaults, so a restart degrades
//! to the default look rather than failing.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use eventkit::theme::{self, EventTheme, ThemeError, ThemeOverrides};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct ThemeStore {
    inner: Arc<RwLock<HashMap<String, ThemeOverrides>>>,
}

impl ThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective theme for `identifier`.
    pub async fn resolve(&self, identifier: &str) -> EventTheme {
        let map = self.inner.read().await;
        theme::resolve(identifier, map.get(identifier))
    }

    /// Validate and store overrides, returning the new effective theme.
    ///
    /// Empty overrides remove the event's record.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if a key or color is invalid; nothing is stored.
    pub async fn save(&self, identifier: &str, overrides: ThemeOverrides) -> Result<EventTheme, ThemeError> {
        overrides.validate()?;
        let mut map = self.inner.write().await;
        if overrides.is_empty() {
            map.remove(identifier);
        } else {
            map.insert(identifier.to_owned(), overrides);
        }
        Ok(theme::resolve(identifier, map.get(identifier)))
    }
}
