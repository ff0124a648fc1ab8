// ============================================================================
// TrackDesk API - Session Cookie
// File: crates/trackdesk-api/src/session.rs
// ============================================================================
//! The session cookie holds `{id, name, email, role, alias}` as JSON, usually
//! URL-encoded. It is issued by the login flow and only read here; logout
//! expires it.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use percent_encoding::percent_decode_str;
use tracing::warn;

use trackdesk_core::SessionUser;

use crate::error::ApiError;
use crate::state::AppState;

/// The signed-in user of the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        session_user(&parts.headers, state.cookie_name())
            .map(CurrentUser)
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))
    }
}

/// Reads the session identity from the request cookies. A missing or
/// undecodable cookie means no session.
pub fn session_user(headers: &HeaderMap, cookie_name: &str) -> Option<SessionUser> {
    let raw = cookie_value(headers, cookie_name)?;
    let user = decode_session(raw);
    if user.is_none() {
        warn!(cookie = cookie_name, "Ignoring malformed session cookie");
    }
    user
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

fn decode_session(raw: &str) -> Option<SessionUser> {
    if let Ok(user) = serde_json::from_str::<SessionUser>(raw) {
        return Some(user);
    }
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    serde_json::from_str::<SessionUser>(&decoded).ok()
}

/// `Set-Cookie` value that deletes the session cookie.
pub fn expired_cookie(name: &str, secure: bool) -> String {
    let mut cookie = format!("{}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax", name);
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
