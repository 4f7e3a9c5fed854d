//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON endpoints and unwraps their response
//! envelope into `Result` values for pages.

pub mod api;
