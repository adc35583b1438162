//! Authentication-related Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Username (matched case-insensitively)
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// User's password (plain text)
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw1", format = "password")]
    pub password: String,
}

/// Issued access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Access token
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub access_token: String,
    /// Always `Bearer`
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Lifetime of the token in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn bearer(access_token: String, expiration_hours: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: expiration_hours * 3600,
        }
    }
}
