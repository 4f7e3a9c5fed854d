//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream calls and shared state so route handlers
//! can stay focused on request validation and cookie plumbing.

pub mod backend;
pub mod theme_store;
