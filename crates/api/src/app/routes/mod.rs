use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::app::endpoint::Endpoint;

pub mod resources;
pub mod system;

/// Router for every endpoint the service exposes.
///
/// Each resource route shares one handler; the `Endpoint` extension attached to
/// the route tells it which payload to build and how to report bad input.
pub fn router() -> Router {
    Endpoint::all()
        .into_iter()
        .fold(Router::new().route("/", get(system::health)), |router, endpoint| {
            router.route(
                &endpoint.path(),
                post(resources::query).layer(Extension(endpoint)),
            )
        })
        .fallback(system::not_found)
}
