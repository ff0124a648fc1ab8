// ============================================================================
// TrackDesk API - Ticket Handlers
// File: crates/trackdesk-api/src/handlers/tickets.rs
// ============================================================================

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use trackdesk_core::pagination::TicketFilter;
use trackdesk_core::services::TicketListParams;

use crate::dto::{NoteRequest, TicketListQuery, TicketListView, TicketRequest, TicketView};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /api/tickets?page=&per_page=&status=&priority=&id=
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<ApiResponse<TicketListView>>, ApiError> {
    let params = TicketListParams {
        pagination: query.pagination(),
        filter: TicketFilter::new(query.status, query.priority),
        id: query.id,
    };

    let listing = state.tickets.list(&user, params).await?;
    Ok(Json(ApiResponse::success(TicketListView {
        page: listing.view.map(TicketView::from),
        status_options: listing.status_options,
        priority_options: listing.priority_options,
    })))
}

/// POST /api/tickets
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<TicketRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Option<TicketView>>>), ApiError> {
    payload.validate()?;

    let receipt = state.tickets.create(&user, payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            receipt.record.map(TicketView::from),
            receipt.message,
        )),
    ))
}

/// PUT /api/tickets/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<TicketRequest>,
) -> Result<Json<ApiResponse<Option<TicketView>>>, ApiError> {
    payload.validate()?;

    let receipt = state.tickets.update(&user, id, payload.into()).await?;
    Ok(Json(ApiResponse::success_with_message(
        receipt.record.map(TicketView::from),
        receipt.message,
    )))
}

/// POST /api/tickets/{id}/notes
pub async fn add_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<NoteRequest>,
) -> Result<Json<ApiResponse<Option<TicketView>>>, ApiError> {
    payload.validate()?;

    let receipt = state.tickets.add_note(&user, id, &payload.content).await?;
    Ok(Json(ApiResponse::success_with_message(
        receipt.record.map(TicketView::from),
        receipt.message,
    )))
}
