//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod report;

use axum::{middleware, response::Redirect, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, middleware::logging_middleware, state::AppState};

/// Create all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/report/") }))
        .merge(health::routes())
        .merge(report::routes())
        .fallback(|| async { AppError::NotFound("Route not found".to_string()) })
}

/// Full application router with middleware layers and state attached
pub fn app(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
