//! Browser-session store shared by the route guard and auth-aware views.
//!
//! DESIGN
//! ======
//! `Session` is a value type; the client wraps it in one `RwSignal` per tab
//! and mutates it only through the transition methods below. Keeping the
//! fields private upholds the invariant that an authenticated session
//! always carries a user.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Identity cached in the `user-data` cookie after login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// Authentication state for the current browser tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
    is_authenticated: bool,
    is_loading: bool,
    identifier: Option<String>,
}

impl Session {
    /// Signed-out session that is not waiting on rehydration.
    #[must_use]
    pub fn new() -> Self {
        Self { user: None, is_authenticated: false, is_loading: false, identifier: None }
    }

    /// Initial state on page mount, before the restorer has run.
    #[must_use]
    pub fn loading() -> Self {
        Self { is_loading: true, ..Self::new() }
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|u| &u.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Tenant the session was restored or logged in for, if known.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Record a successful login.
    pub fn login(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.is_loading = false;
    }

    /// Rehydrate from cookies for the given tenant.
    pub fn restore(&mut self, identifier: &str, user: SessionUser) {
        self.login(user);
        self.identifier = Some(identifier.to_owned());
    }

    /// Drop the user and leave the session signed out.
    pub fn logout(&mut self) {
        *self = Self::new();
    }

    /// Mark rehydration complete without a user.
    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
