//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! and error/panic response mapping.

mod error_handler;
mod logging;
mod request_id;

pub use error_handler::{error_to_status_code, handle_panic, internal_error_response};
pub use logging::{access_log_line, logging_middleware};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
