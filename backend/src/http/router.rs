//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The API is read-only and public
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // `/eclipses/next` is a static segment and wins over `{eclipse_type}`
    Router::new()
        .route("/", get(handlers::home))
        .route("/docs", get(handlers::docs))
        .route("/health", get(handlers::health_check))
        .route("/eclipses", get(handlers::list_eclipses))
        .route("/eclipses/next", get(handlers::next_eclipse))
        .route("/eclipses/{eclipse_type}", get(handlers::eclipses_by_type))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
