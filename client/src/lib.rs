//! # client
//!
//! Leptos + WASM frontend for EventDesk.
//!
//! This crate contains the route-level pages, the session context and its
//! `AuthRestorer`, the role-based `RouteGuard`, REST helpers, and browser
//! cookie/storage utilities. Domain rules (roles, guard decision, restore
//! validation, catalogs) come from `eventkit` so SSR and hydrate builds agree.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
