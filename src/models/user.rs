use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Message returned to clients for any rejected user payload.
pub const INVALID_USER_MESSAGE: &str = "Invalid user data: Name and valid Email are required.";

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// NewUser model for inserting new records
///
/// Values are stored verbatim; validation only inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewUser {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "email_like"))]
    pub email: String,
}

/// UpdateUser model for full replacement of name and email
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "email_like"))]
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attaches an id, producing the record as it will be stored.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

impl UpdateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl User {
    /// Overwrites name and email in place. The id never changes.
    pub fn apply(&mut self, update: UpdateUser) {
        self.name = update.name;
        self.email = update.email;
    }
}

fn invalid(code: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(INVALID_USER_MESSAGE))
}

/// Rejects empty and whitespace-only values.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank"));
    }
    Ok(())
}

/// A non-blank value containing `@`. No further address syntax is checked.
fn email_like(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !value.contains('@') {
        return Err(invalid("email"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_new_user() {
        assert!(NewUser::new("Alice", "alice@example.com").validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let errors = NewUser::new("   ", "alice@example.com")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_email_without_at_rejected() {
        let errors = NewUser::new("Alice", "alice.example.com")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_blank_email_rejected() {
        assert!(NewUser::new("Alice", "\t\n").validate().is_err());
        assert!(NewUser::new("Alice", "").validate().is_err());
    }

    #[test]
    fn test_single_at_is_enough() {
        // Only the presence of '@' is checked
        assert!(NewUser::new("Alice", "@").validate().is_ok());
        assert!(UpdateUser::new("Bob", "b@").validate().is_ok());
    }

    #[test]
    fn test_error_message_is_client_message() {
        for errors in [
            UpdateUser::new("", "bad-email").validate().unwrap_err(),
            NewUser::new("  ", "").validate().unwrap_err(),
            NewUser::new("Alice", "alice.example.com").validate().unwrap_err(),
        ] {
            let field_errors = errors.field_errors();
            assert!(!field_errors.is_empty());
            for (_, errs) in field_errors {
                for error in errs {
                    assert_eq!(error.message.as_deref(), Some(INVALID_USER_MESSAGE));
                }
            }
        }
    }

    #[test]
    fn test_failure_codes_name_the_rule() {
        let errors = NewUser::new("Alice", "alice.example.com")
            .validate()
            .unwrap_err();
        assert_eq!(errors.field_errors()["email"][0].code, "email");

        let errors = NewUser::new("", "").validate().unwrap_err();
        assert_eq!(errors.field_errors()["name"][0].code, "blank");
        assert_eq!(errors.field_errors()["email"][0].code, "blank");
    }

    #[test]
    fn test_values_kept_verbatim() {
        let user = NewUser::new("  Alice ", " a@b.com ").into_user(7);
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "  Alice ");
        assert_eq!(user.email, " a@b.com ");
    }

    #[test]
    fn test_apply_preserves_id() {
        let mut user = NewUser::new("Bob", "bob@example.com").into_user(2);
        user.apply(UpdateUser::new("Bobby", "bobby@example.com"));
        assert_eq!(user.id, 2);
        assert_eq!(user.name, "Bobby");
        assert_eq!(user.email, "bobby@example.com");
    }
}
