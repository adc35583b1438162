//! User-related DTOs for API requests and responses.

use crate::models::{NewUser, User};
use crate::utils::password::MAX_PASSWORD_BYTES;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
///
/// Unknown fields are ignored.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"))]
    #[schema(example = "Alice", min_length = 3, max_length = 20)]
    pub username: String,
    #[validate(custom(function = "validate_password_bytes"))]
    #[schema(example = "pw1", format = "password", min_length = 1)]
    pub password: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com", format = "email")]
    pub email: Option<String>,
    #[validate(length(max = 100, message = "Full name must be at most 100 characters"))]
    #[schema(example = "Alice Liddell", max_length = 100)]
    pub full_name: Option<String>,
}

/// bcrypt limits input by bytes, so multibyte characters count several times.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("length")
            .with_message("Password must be between 1 and 72 bytes".into()));
    }
    Ok(())
}

impl CreateUserRequest {
    /// Converts the request DTO into a NewUser model.
    ///
    /// Username normalisation and hashing happen in the service.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            username: self.username,
            password: self.password,
            email: self.email,
            full_name: self.full_name,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// A stored user record as returned by the API.
///
/// `password` is the bcrypt hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "$2b$10$...")]
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: String,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password,
            email: user.email,
            full_name: user.full_name,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}
