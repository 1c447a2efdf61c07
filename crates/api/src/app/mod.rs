//! HTTP API application wiring (Axum router + shared state).
//!
//! - `endpoint.rs`: which resource a route serves and how it reports bad input
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use restlab_auth::TokenDirectory;

use crate::middleware;

pub mod endpoint;
pub mod errors;
pub mod routes;

pub use endpoint::{Endpoint, ErrorPolicy};

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The directory is shared read-only by every request.
pub fn build_app(directory: TokenDirectory) -> Router {
    let directory = Arc::new(directory);

    routes::router()
        .layer(Extension(directory))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new())
                .layer(middleware::cors_layer()),
        )
}
