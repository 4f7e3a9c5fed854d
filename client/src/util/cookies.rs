//! `document.cookie` access for session restore and logout.
//!
//! The server sets the session cookies without `HttpOnly` so the restorer can
//! read them here. Writes only ever expire cookies; creation is the server's
//! job.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::HashMap;

use eventkit::cookies::SESSION_COOKIES;

/// Cookie assignment that expires `name` at the root path.
pub fn expiry_assignment(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}

/// Current cookies as a decoded name → value map. Empty outside the browser.
pub fn read_jar() -> HashMap<String, String> {
    #[cfg(feature = "hydrate")]
    {
        document_cookie().map(|raw| eventkit::cookies::parse_cookie_string(&raw)).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        HashMap::new()
    }
}

/// Expire every session cookie. `login-first-time` is left in place.
pub fn expire_session_cookies() {
    for name in SESSION_COOKIES {
        write_cookie(&expiry_assignment(name));
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn document_cookie() -> Option<String> {
    html_document()?.cookie().ok()
}

fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(assignment).is_err() {
                log::warn!("cookie write rejected: {assignment}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}
