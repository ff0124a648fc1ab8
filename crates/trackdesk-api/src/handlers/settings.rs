use axum::{extract::State, Json};

use crate::dto::SettingsView;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<SettingsView>>, ApiError> {
    let settings = state.settings.fetch(&user.alias).await?;
    Ok(Json(ApiResponse::success(SettingsView::from(settings))))
}
