use axum::{extract::State, Json};

use trackdesk_core::SelectOption;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /api/users/options
pub async fn options(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.users.options(&user).await?;
    Ok(Json(ApiResponse::success(options)))
}
