// ============================================================================
// TrackDesk API - Auth Handlers
// File: crates/trackdesk-api/src/handlers/auth.rs
// ============================================================================
//! Session handlers. Login happens elsewhere; these only read and clear the
//! session cookie.

use axum::{
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use tracing::{info, warn};

use crate::dto::MeView;
use crate::response::ApiResponse;
use crate::session::{expired_cookie, CurrentUser};
use crate::state::AppState;

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, CurrentUser(user): CurrentUser) -> Json<ApiResponse<MeView>> {
    // A failed profile lookup still answers with the session identity.
    let profile = match state.users.profile(&user).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!(alias = %user.alias, user_id = user.id, "Profile lookup failed: {}", e);
            None
        }
    };

    Json(ApiResponse::success(MeView { user, profile }))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("Session cleared");
    (
        AppendHeaders([(header::SET_COOKIE, expired_cookie(state.cookie_name(), state.secure_cookies()))]),
        Json(ApiResponse::success_with_message((), "Logged out successfully")),
    )
}
