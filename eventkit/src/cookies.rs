//! Cookie names and parsing shared by login, logout, and restore.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod tests;

use std::borrow::Cow;
use std::collections::HashMap;

use percent_encoding::percent_decode_str;

pub const AUTH_TOKEN: &str = "auth-token";
pub const REFRESH_TOKEN: &str = "refresh-token";
pub const USER_DATA: &str = "user-data";
pub const EVENT_IDENTIFIER: &str = "event-identifier";
pub const USER_ROLE: &str = "user-role";
pub const USER_EMAIL: &str = "user-email";
/// Survives logout so returning users skip first-visit onboarding.
pub const LOGIN_FIRST_TIME: &str = "login-first-time";

/// Cookies that make up a session; all of them are expired on logout.
pub const SESSION_COOKIES: [&str; 6] = [AUTH_TOKEN, REFRESH_TOKEN, USER_DATA, EVENT_IDENTIFIER, USER_ROLE, USER_EMAIL];

/// Parse a `Cookie` header or `document.cookie` string into name/value pairs.
///
/// Segments without `=` are skipped. Values are percent-decoded when they
/// decode to valid UTF-8, otherwise kept verbatim. Later duplicates win.
#[must_use]
pub fn parse_cookie_string(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|segment| {
            let (name, value) = segment.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_owned(), percent_decode(value.trim())))
        })
        .collect()
}

fn percent_decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8().map_or_else(|_| value.to_owned(), Cow::into_owned)
}
