use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(json!({
        "status": "ok",
        "service": state.config.app.name,
    })))
}
