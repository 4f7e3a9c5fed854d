//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` is the per-tenant entry route. Every other page wraps its content
//! in `PageShell`, which applies the role guard for that page.

pub mod dashboard;
pub mod exhibitors;
pub mod field_mapping;
pub mod login;
pub mod theme_settings;
pub mod visitors;
