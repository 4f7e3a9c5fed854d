//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session context and turn it into navigation
//! (`RouteGuard`), state restoration (`AuthRestorer`), or page chrome
//! (`PageShell`).

pub mod auth_restorer;
pub mod page_shell;
pub mod route_guard;
