use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use restlab_auth::AuthError;
use restlab_core::DomainError;

use crate::app::endpoint::ErrorPolicy;

/// Body returned by [`ErrorPolicy::MaskedOk`] routes on validation failure.
pub const MASKED_INVALID_REQUEST: &str = "Invalid request";

/// Everything that can stop a mock data query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Unauthorized(#[from] AuthError),
}

pub fn query_error_to_response(err: QueryError, policy: ErrorPolicy) -> axum::response::Response {
    match err {
        QueryError::InvalidBody(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_body", msg),
        QueryError::Validation(e) => match policy {
            ErrorPolicy::ClientError => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
            }
            ErrorPolicy::ServerError => {
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "validation_error", e.to_string())
            }
            ErrorPolicy::MaskedOk => {
                (StatusCode::OK, axum::Json(MASKED_INVALID_REQUEST)).into_response()
            }
        },
        QueryError::Unauthorized(e) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_token", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
