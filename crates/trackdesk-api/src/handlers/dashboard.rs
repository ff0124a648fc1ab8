use axum::{extract::State, Json};

use crate::dto::DashboardView;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn summary(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<DashboardView>>, ApiError> {
    let summary = state.dashboard.summary(&user).await?;
    Ok(Json(ApiResponse::success(DashboardView::from(summary))))
}
