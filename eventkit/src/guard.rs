//! Role-based route guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client's `RouteGuard` component evaluates [`decide`] on every session
//! change and turns the outcome into a spinner, a navigation, or the page
//! children. The decision itself is pure so the redirect table can be tested
//! without a browser.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use crate::role::Role;
use crate::session::Session;

/// What the guard should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Rehydration still pending; show a loading indicator.
    Loading,
    /// Navigate away without rendering the page.
    Redirect(String),
    /// Render the guarded children unchanged.
    Render,
}

/// Decide the guard outcome for `session` on a page that admits `allowed`.
#[must_use]
pub fn decide(session: &Session, allowed: &[Role], identifier: &str) -> GuardOutcome {
    if session.is_loading() {
        return GuardOutcome::Loading;
    }
    let Some(role) = session.role().filter(|_| session.is_authenticated()) else {
        return GuardOutcome::Redirect(login_path(identifier));
    };
    if allowed.contains(role) {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect(role.default_path(identifier))
    }
}

/// Per-tenant login route.
#[must_use]
pub fn login_path(identifier: &str) -> String {
    format!("/{identifier}")
}

const ADMIN_ONLY: &[Role] = &[Role::EventAdmin];
const ADMIN_OR_EXHIBITOR: &[Role] = &[Role::EventAdmin, Role::Exhibitor];
const ADMIN_OR_VISITOR: &[Role] = &[Role::EventAdmin, Role::Visitor];

/// Guarded pages and the roles each admits.
///
/// Every role's default path lands on a page that admits that role, so a
/// wrong-role redirect never bounces back to the page it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAccess {
    Dashboard,
    Exhibitors,
    Visitors,
    ThemeSettings,
    FieldMapping,
}

impl PageAccess {
    pub const ALL: [Self; 5] =
        [Self::Dashboard, Self::Exhibitors, Self::Visitors, Self::ThemeSettings, Self::FieldMapping];

    /// Path segment below `/{identifier}/event-admin/`.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Exhibitors => "exhibitors",
            Self::Visitors => "visitors",
            Self::ThemeSettings => "theme",
            Self::FieldMapping => "field-mapping",
        }
    }

    #[must_use]
    pub fn path(self, identifier: &str) -> String {
        format!("/{identifier}/event-admin/{}", self.segment())
    }

    #[must_use]
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Dashboard | Self::ThemeSettings | Self::FieldMapping => ADMIN_ONLY,
            Self::Exhibitors => ADMIN_OR_EXHIBITOR,
            Self::Visitors => ADMIN_OR_VISITOR,
        }
    }
}
