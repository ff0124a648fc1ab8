use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use trackdesk_core::{Customer, PageView, SelectOption};

use crate::dto::{CustomerListQuery, CustomerRequest};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /api/customers?page=&per_page=&search=
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<ApiResponse<PageView<Customer>>>, ApiError> {
    let pagination = query.pagination();
    let view = state.customers.list(&user, pagination, query.search).await?;
    Ok(Json(ApiResponse::success(view)))
}

/// GET /api/customers/options
pub async fn options(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.customers.options(&user).await?;
    Ok(Json(ApiResponse::success(options)))
}

/// GET /api/customers/titles
pub async fn titles(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let titles = state.customers.titles(&user).await?;
    Ok(Json(ApiResponse::success(titles)))
}

/// POST /api/customers
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Option<Customer>>>), ApiError> {
    payload.validate()?;

    let receipt = state.customers.create(&user, payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(receipt.record, receipt.message)),
    ))
}

/// PUT /api/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerRequest>,
) -> Result<Json<ApiResponse<Option<Customer>>>, ApiError> {
    payload.validate()?;

    let receipt = state.customers.update(&user, id, payload.into()).await?;
    Ok(Json(ApiResponse::success_with_message(receipt.record, receipt.message)))
}
