//! Shared domain model for the EventDesk server and client.
//!
//! This crate owns everything both sides must agree on: roles, the session
//! store and its transitions, the route-guard decision, cookie names, the
//! JSON response envelope, and the theme and field-mapping catalogs. It has
//! no web-framework dependency so the guard can be exercised in plain unit
//! tests and reused from SSR and hydrate builds alike.

pub mod cookies;
pub mod envelope;
pub mod fields;
pub mod guard;
pub mod restore;
pub mod role;
pub mod session;
pub mod theme;

pub use envelope::Envelope;
pub use guard::{GuardOutcome, PageAccess};
pub use role::Role;
pub use session::{Session, SessionUser};
