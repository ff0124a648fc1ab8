//! Page-route guard: requests without a session go to the login page.

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use tracing::debug;

use crate::session::session_user;
use crate::state::AppState;

const LOGIN_PATH: &str = "/login";
const PUBLIC_PREFIXES: [&str; 4] = ["/api/", "/_next", "/assets", "/health"];
const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".svg", ".ico", ".webp"];

#[derive(Debug, Deserialize)]
struct AliasParam {
    alias: Option<String>,
}

pub async fn require_page_session(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if is_public_path(&path) || session_user(request.headers(), state.cookie_name()).is_some() {
        return next.run(request).await;
    }

    let alias = Query::<AliasParam>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(param)| param.alias)
        .filter(|alias| !alias.trim().is_empty());

    debug!(%path, ?alias, "No session, redirecting to login");
    Redirect::temporary(&login_location(alias.as_deref())).into_response()
}

pub fn is_public_path(path: &str) -> bool {
    if path == LOGIN_PATH || path.starts_with("/login/") || path == "/api" {
        return true;
    }
    if PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return true;
    }
    let lower = path.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn login_location(alias: Option<&str>) -> String {
    match alias {
        Some(alias) => format!("{}?alias={}", LOGIN_PATH, utf8_percent_encode(alias, NON_ALPHANUMERIC)),
        None => LOGIN_PATH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/login"));
        assert!(is_public_path("/api/tickets"));
        assert!(is_public_path("/_next/static/chunk.js"));
        assert!(is_public_path("/assets/app.css"));
        assert!(is_public_path("/logo.PNG"));
        assert!(is_public_path("/favicon.ico"));

        assert!(!is_public_path("/"));
        assert!(!is_public_path("/tickets"));
        assert!(!is_public_path("/loginx"));
    }

    #[test]
    fn test_login_location_keeps_alias() {
        assert_eq!(login_location(None), "/login");
        assert_eq!(login_location(Some("acme")), "/login?alias=acme");
        assert_eq!(login_location(Some("a b")), "/login?alias=a%20b");
    }
}
