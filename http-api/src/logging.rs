//! Structured request logging middleware
//!
//! Emits one line per request with method, path, status, and timing.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Request logging middleware for the todo API
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    if response.status().is_server_error() {
        tracing::error!(%method, path, status, elapsed_ms, "Request failed");
    } else {
        tracing::info!(%method, path, status, elapsed_ms, "Request handled");
    }

    response
}
