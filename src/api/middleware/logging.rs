//! Logging middleware for request/response tracing.
//!
//! Every request gets an `http_request` span carrying its request ID. When
//! `server.access_log` is on, a `[LOG] METHOD PATH` line also goes to stdout.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, Level, info, span};

use super::RequestId;
use crate::state::AppState;

/// Middleware that logs request and response information.
///
/// # Logged Information
/// - Request: HTTP method, path, request ID
/// - Response: status code, duration in milliseconds
pub async fn logging_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    if state.settings.server.access_log {
        println!("{}", access_log_line(&method, uri.path()));
    }

    let span = span!(
        Level::INFO,
        "http_request",
        method = %method,
        uri = %uri,
        request_id = %request_id
    );

    async move {
        info!(method = %method, path = %uri.path(), "Request received");

        let start = Instant::now();
        let response = next.run(request).await;

        info!(
            status = %response.status().as_u16(),
            duration_ms = %start.elapsed().as_millis(),
            "Response sent"
        );

        response
    }
    .instrument(span)
    .await
}

/// Formats the stdout access line for a request.
pub fn access_log_line(method: &Method, path: &str) -> String {
    format!("[LOG] {} {}", method, path)
}
