//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// How a finished request is reported
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Ok,
    ClientError,
    ServerError,
}

impl Outcome {
    /// Unknown driver codes and routes are expected traffic, not client errors
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::ServerError
        } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
            Self::ClientError
        } else {
            Self::Ok
        }
    }
}

/// Log method, path, query, status and latency of every request
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match Outcome::of(status) {
        Outcome::ServerError => warn!(
            method = %method,
            path = %path,
            query = %query,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed with server error"
        ),
        Outcome::ClientError => warn!(
            method = %method,
            path = %path,
            query = %query,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed with client error"
        ),
        Outcome::Ok => info!(
            method = %method,
            path = %path,
            query = %query,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        ),
    }

    response
}
