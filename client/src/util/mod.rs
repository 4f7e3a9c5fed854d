//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, `localStorage`, the
//! document root's style) from page and component logic. Each keeps its
//! decision logic in pure functions and its `web-sys` glue behind the
//! `hydrate` feature.

pub mod cookies;
pub mod persistence;
pub mod storage_cleanup;
pub mod theme;
