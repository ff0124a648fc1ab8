use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use trackdesk_core::PageView;

use crate::dto::{into_items, CreateSettlementRequest, SettlementListQuery, SettlementView, UpdateSettlementRequest};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /api/settlements?page=&per_page=&ticket_id=&id=
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<SettlementListQuery>,
) -> Result<Json<ApiResponse<PageView<SettlementView>>>, ApiError> {
    let view = state
        .settlements
        .list(&user, query.pagination(), query.ticket_id, query.id)
        .await?;
    Ok(Json(ApiResponse::success(view.map(SettlementView::from))))
}

/// GET /api/settlements/{id}
pub async fn get(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<SettlementView>>, ApiError> {
    let settlement = state.settlements.get(&user, id).await?;
    Ok(Json(ApiResponse::success(SettlementView::from(settlement))))
}

/// POST /api/settlements
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateSettlementRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Option<SettlementView>>>), ApiError> {
    payload.validate()?;

    let receipt = state
        .settlements
        .create(&user, payload.ticket_id, into_items(payload.items))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            receipt.record.map(SettlementView::from),
            receipt.message,
        )),
    ))
}

/// PUT /api/settlements/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSettlementRequest>,
) -> Result<Json<ApiResponse<Option<SettlementView>>>, ApiError> {
    payload.validate()?;

    let receipt = state.settlements.update(&user, id, into_items(payload.items)).await?;
    Ok(Json(ApiResponse::success_with_message(
        receipt.record.map(SettlementView::from),
        receipt.message,
    )))
}
