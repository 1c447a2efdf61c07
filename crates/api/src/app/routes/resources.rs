use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::Extension,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};

use restlab_auth::{TokenDirectory, authorize};
use restlab_core::{Payload, QueryByDateRequest};

use crate::app::endpoint::Endpoint;
use crate::app::errors::{self, QueryError};

/// `POST /<kind>[n]` — validate, authorize, answer with the mocked payload.
pub async fn query(
    Extension(directory): Extension<Arc<TokenDirectory>>,
    Extension(endpoint): Extension<Endpoint>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    match resolve(&directory, endpoint, content_type, &body) {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => {
            tracing::warn!(
                resource = %endpoint.kind,
                policy = ?endpoint.policy,
                error = %e,
                "query rejected"
            );
            errors::query_error_to_response(e, endpoint.policy)
        }
    }
}

/// Validator → Authorizer → Response Builder.
///
/// An empty body decodes as `{}` so that it fails validation, not decoding.
/// A non-empty body must be a JSON object sent with a JSON content type.
pub fn resolve(
    directory: &TokenDirectory,
    endpoint: Endpoint,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Payload, QueryError> {
    let request = decode(content_type, body)?;
    let query = request.validate()?;
    let identity = authorize(directory, query.token())?;

    tracing::info!(
        resource = %endpoint.kind,
        date = query.date(),
        caller = identity.email(),
        "query served"
    );

    Ok(Payload::mocked(endpoint.kind))
}

fn decode(content_type: Option<&str>, body: &[u8]) -> Result<QueryByDateRequest, QueryError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(QueryByDateRequest::default());
    }

    if !content_type.is_some_and(is_json) {
        return Err(QueryError::InvalidBody(format!(
            "unsupported content type: {}",
            content_type.unwrap_or("<none>")
        )));
    }

    // serde accepts a struct written as a positional array; only objects are bodies.
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| QueryError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(QueryError::InvalidBody("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| QueryError::InvalidBody(e.to_string()))
}

/// `application/json` or any `+json` suffix, parameters ignored.
fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}
