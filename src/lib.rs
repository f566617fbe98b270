//! Roster API: a small axum service over an in-memory basketball roster.

use std::sync::Arc;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod routes;

use roster::Roster;

/// Full application: routes plus CORS, request tracing and panic recovery.
pub fn app(roster: Roster) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router(Arc::new(roster))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
