//! Session rehydration from cached cookies.
//!
//! TRADE-OFFS
//! ==========
//! Token freshness and signature are never checked here. Restoring only
//! avoids a flash of signed-out UI on reload; the backend still decides
//! what the token may do.

#[cfg(test)]
#[path = "restore_test.rs"]
mod tests;

use std::collections::HashMap;

use serde::Deserialize;

use crate::cookies;
use crate::role::Role;
use crate::session::SessionUser;

#[derive(Deserialize)]
struct CachedUser {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Build a user from a token and a cached `user-data` record.
///
/// Returns `None` unless the token is non-empty and the record has a
/// non-empty `id` and `email`. Numeric ids are accepted. When the record
/// carries no role, `fallback_role` (the `user-role` cookie) is used.
#[must_use]
pub fn restorable_user(token: Option<&str>, user_json: Option<&str>, fallback_role: Option<&str>) -> Option<SessionUser> {
    non_blank(token)?;
    let cached: CachedUser = serde_json::from_str(user_json?).ok()?;

    let id = match cached.id? {
        serde_json::Value::String(s) => s.trim().to_owned(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let email = cached.email?.trim().to_owned();
    if id.is_empty() || email.is_empty() {
        return None;
    }

    let role = non_blank(cached.role.as_deref())
        .or_else(|| non_blank(fallback_role))
        .map_or_else(|| Role::Other(String::new()), Role::parse);

    Some(SessionUser { id, email, role })
}

/// Everything the restorer needs, read from a parsed cookie map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestorePlan {
    pub identifier: String,
    pub user: SessionUser,
}

/// Decide whether the cookies in `jar` can restore a session.
///
/// The tenant comes from the `event-identifier` cookie, falling back to
/// `route_identifier` when the cookie is absent or blank.
#[must_use]
pub fn plan_restore(jar: &HashMap<String, String>, route_identifier: Option<&str>) -> Option<RestorePlan> {
    let user = restorable_user(
        jar.get(cookies::AUTH_TOKEN).map(String::as_str),
        jar.get(cookies::USER_DATA).map(String::as_str),
        jar.get(cookies::USER_ROLE).map(String::as_str),
    )?;
    let identifier = non_blank(jar.get(cookies::EVENT_IDENTIFIER).map(String::as_str))
        .or_else(|| non_blank(route_identifier))?
        .to_owned();
    Some(RestorePlan { identifier, user })
}
