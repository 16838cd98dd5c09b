//! User-related DTOs for API requests and responses.

use crate::models::{NewUser, UpdateUser, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating or replacing a user.
///
/// Missing fields deserialize as empty strings and fail validation
/// downstream. Any `id` in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
#[schema(example = json!({"name": "Cara", "email": "cara@x.com"}))]
pub struct UserRequest {
    pub name: String,
    pub email: String,
}

impl UserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser::new(self.name, self.email)
    }

    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser::new(self.name, self.email)
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for a stored user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 1, "name": "Alice", "email": "alice@example.com"}))]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_fields_default_to_empty() {
        let request: UserRequest = serde_json::from_str(r#"{"name": "Cara"}"#).unwrap();
        assert_eq!(request.name, "Cara");
        assert_eq!(request.email, "");
    }

    #[test]
    fn test_request_ignores_id() {
        let request: UserRequest =
            serde_json::from_str(r#"{"id": 77, "name": "Cara", "email": "cara@x.com"}"#).unwrap();
        assert_eq!(
            request.into_new_user(),
            NewUser::new("Cara", "cara@x.com")
        );
    }

    #[test]
    fn test_response_serialization() {
        let user = NewUser::new("Alice", "alice@example.com").into_user(1);
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "alice@example.com"})
        );
    }
}
