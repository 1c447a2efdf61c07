use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::app::errors;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "data": "Server is up and running" })))
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "route not found")
}
