//! Auth routes: upstream login, cookie-backed session lookup, logout.

use std::collections::HashMap;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use eventkit::cookies::{self, SESSION_COOKIES};
use eventkit::restore::{self, RestorePlan};
use eventkit::{Envelope, SessionUser};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::{self, ApiError, ApiResult};
use crate::services::backend::{LoginGrant, LoginRequest};
use crate::state::AppState;

const SESSION_MAX_AGE_DAYS: i64 = 7;
const FIRST_LOGIN_MAX_AGE_DAYS: i64 = 365;

// =============================================================================
// COOKIE HELPERS
// =============================================================================

/// Session cookies stay readable from script: the client restorer reads
/// `auth-token` and `user-data` on mount.
fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

/// Cookies written after a successful login.
///
/// # Errors
///
/// Returns an internal error if the user record cannot be serialized.
pub(crate) fn login_cookies(identifier: &str, grant: &LoginGrant, secure: bool) -> Result<Vec<Cookie<'static>>, ApiError> {
    let user_data = serde_json::to_string(&grant.user).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(vec![
        session_cookie(cookies::AUTH_TOKEN, grant.token.clone(), secure),
        session_cookie(cookies::REFRESH_TOKEN, grant.refresh_token.clone().unwrap_or_default(), secure),
        session_cookie(cookies::USER_DATA, user_data, secure),
        session_cookie(cookies::EVENT_IDENTIFIER, identifier.to_owned(), secure),
        session_cookie(cookies::USER_ROLE, grant.user.role.to_string(), secure),
        session_cookie(cookies::USER_EMAIL, grant.user.email.clone(), secure),
    ])
}

/// Expired copies of every session cookie. `login-first-time` is left alone.
pub(crate) fn expired_session_cookies(secure: bool) -> Vec<Cookie<'static>> {
    SESSION_COOKIES
        .iter()
        .map(|name| {
            Cookie::build((*name, ""))
                .path("/")
                .same_site(SameSite::Lax)
                .secure(secure)
                .max_age(Duration::ZERO)
                .build()
        })
        .collect()
}

fn first_login_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((cookies::LOGIN_FIRST_TIME, "true"))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(FIRST_LOGIN_MAX_AGE_DAYS))
        .build()
}

fn jar_map(jar: &CookieJar) -> HashMap<String, String> {
    jar.iter().map(|c| (c.name().to_owned(), c.value().to_owned())).collect()
}

/// Session restorable from request cookies, if any.
pub(crate) fn session_from_jar(jar: &CookieJar) -> Option<RestorePlan> {
    restore::plan_restore(&jar_map(jar), None)
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub identifier: String,
    pub user: SessionUser,
    pub first_login: bool,
    pub redirect_to: String,
}

/// `POST /api/auth/login`: verify credentials upstream and set session cookies.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<(CookieJar, Json<Envelope<LoginResponse>>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let identifier = error::require(body.identifier.as_deref(), "identifier")?;
    let email = error::require(body.email.as_deref(), "email")?;
    let password = body
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("password is required".to_owned()))?;

    let Some(backend) = &state.backend else {
        return Err(ApiError::Unavailable("Login backend not configured".to_owned()));
    };

    let request = LoginRequest { identifier: identifier.clone(), email, password };
    let grant = match backend.login(&request).await {
        Ok(grant) => grant,
        Err(e) => {
            tracing::warn!(%identifier, error = %e, "login failed");
            return Err(e.into());
        }
    };

    let secure = state.config.cookie_secure;
    let first_login = jar.get(cookies::LOGIN_FIRST_TIME).is_none();
    let mut jar = jar;
    for cookie in login_cookies(&identifier, &grant, secure)? {
        jar = jar.add(cookie);
    }
    if first_login {
        jar = jar.add(first_login_cookie(secure));
    }

    tracing::info!(%identifier, user_id = %grant.user.id, role = %grant.user.role, first_login, "login succeeded");
    let redirect_to = grant.user.role.default_path(&identifier);
    let response = LoginResponse { identifier, user: grant.user, first_login, redirect_to };
    Ok((jar, Json(Envelope::ok("Login successful", response))))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub identifier: String,
    pub user: SessionUser,
    pub default_path: String,
}

/// `GET /api/auth/me`: the session user decoded from cookies.
pub async fn me(jar: CookieJar) -> ApiResult<MeResponse> {
    let plan = session_from_jar(&jar).ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_owned()))?;
    let default_path = plan.user.role.default_path(&plan.identifier);
    error::ok("Session active", MeResponse { identifier: plan.identifier, user: plan.user, default_path })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub cleared: Vec<&'static str>,
}

/// `POST /api/auth/logout`: expire every session cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Envelope<LogoutResponse>>) {
    let identifier = jar.get(cookies::EVENT_IDENTIFIER).map(|c| c.value().to_owned());
    let mut jar = jar;
    for cookie in expired_session_cookies(state.config.cookie_secure) {
        jar = jar.add(cookie);
    }
    tracing::info!(identifier = identifier.as_deref().unwrap_or("-"), "logout");
    let body = LogoutResponse { cleared: SESSION_COOKIES.to_vec() };
    (jar, Json(Envelope::ok("Logged out", body)))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
