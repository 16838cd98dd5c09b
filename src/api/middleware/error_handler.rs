//! Error handler for converting AppError to HTTP responses.
//!
//! Client errors carry plain-text bodies (or none at all). Server faults,
//! including panics caught by `CatchPanicLayer`, share a single JSON body
//! and are logged here instead of being echoed to the client.

use std::any::Any;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404, empty body
    /// - Validation → 400, reason as plain text
    /// - BadRequest → 400, message as plain text
    /// - Configuration → 500, generic JSON body
    /// - Internal → 500, generic JSON body
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        match self {
            AppError::NotFound { .. } => status.into_response(),
            AppError::Validation { reason, .. } => plain_text(status, reason),
            AppError::BadRequest { message } => plain_text(status, message),
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = ?source, "Configuration error while handling request");
                internal_error_response()
            }
            AppError::Internal { source } => {
                tracing::error!(error = ?source, "Unhandled error while handling request");
                internal_error_response()
            }
        }
    }
}

/// Maps an AppError to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// The 500 response shared by errors and panics.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::unexpected()),
    )
        .into_response()
}

/// Panic handler for `CatchPanicLayer::custom`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    internal_error_response()
}
