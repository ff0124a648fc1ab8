use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use trackdesk_core::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The remote sheet API failed; the message is user-facing.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::TicketNotFound(_)
            | DomainError::SettlementNotFound(_)
            | DomainError::SettingsNotFound(_) => ApiError::NotFound(err.to_string()),
            DomainError::OutOfVocabulary { .. } | DomainError::ValidationError(_) => {
                ApiError::BadRequest(err.to_string())
            }
            DomainError::ModuleDisabled(_) => ApiError::Forbidden(err.to_string()),
            DomainError::Remote(message) => ApiError::Upstream(message),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::debug!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            }
            ApiError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, "FORBIDDEN", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg)
            }
        };

        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_statuses() {
        let cases = [
            (DomainError::TicketNotFound(4), StatusCode::NOT_FOUND),
            (DomainError::SettlementNotFound(4), StatusCode::NOT_FOUND),
            (DomainError::SettingsNotFound("acme".into()), StatusCode::NOT_FOUND),
            (DomainError::ValidationError("Title is required".into()), StatusCode::BAD_REQUEST),
            (
                DomainError::OutOfVocabulary { field: "status", value: "x".into() },
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::ModuleDisabled("settlements".into()), StatusCode::FORBIDDEN),
            (DomainError::Remote("Failed to add ticket".into()), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }

    #[test]
    fn test_remote_message_is_kept_verbatim() {
        match ApiError::from(DomainError::Remote("Sheet is locked".into())) {
            ApiError::Upstream(msg) => assert_eq!(msg, "Sheet is locked"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
