//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user` - User-related request/response DTOs
//! - `error` - Generic server error body
//! - `health` - Health check responses

mod error;
mod health;
mod user;

pub use error::{ErrorResponse, UNEXPECTED_ERROR_MESSAGE};
pub use health::{HealthResponse, HealthStatus};
pub use user::{UserRequest, UserResponse};
