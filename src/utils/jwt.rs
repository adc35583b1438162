use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Token type enumeration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Access token for API authentication (short-lived)
    Access,
}

/// JWT Claims structure containing user information and token metadata
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (normalized username)
    pub sub: String,
    /// Token type
    pub token_type: TokenType,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user valid for `expiration_hours`.
    pub fn new(username: String, token_type: TokenType, expiration_hours: i64) -> Self {
        let now = Timestamp::now();
        let exp = now.as_second() + SignedDuration::from_hours(expiration_hours).as_secs();

        Self {
            sub: username,
            token_type,
            iat: now.as_second(),
            exp,
        }
    }
}

/// Generates a signed HS256 access token for a user.
///
/// # Example
/// ```ignore
/// let token = generate_access_token("alice", "secret", 1)?;
/// ```
pub fn generate_access_token(
    username: &str,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(username.to_string(), TokenType::Access, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Validates and decodes an access token.
pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Unauthorized {
            message: "Token has expired".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidToken => AppError::Unauthorized {
            message: "Invalid token".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::Unauthorized {
            message: "Invalid token signature".to_string(),
        },
        _ => AppError::Unauthorized {
            message: format!("Token validation failed: {}", e),
        },
    })?;

    if claims.token_type != TokenType::Access {
        return Err(AppError::Unauthorized {
            message: format!("Invalid token type: {:?}", claims.token_type),
        });
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing";

    #[test]
    fn test_generate_access_token() {
        let token = generate_access_token("alice", TEST_SECRET, 1).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.matches('.').count(), 2);
    }

    #[test]
    fn test_validate_token_success() {
        let token = generate_access_token("alice", TEST_SECRET, 1).unwrap();

        let claims = validate_access_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.token_type, TokenType::Access);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_validate_token_invalid_secret() {
        let token = generate_access_token("alice", TEST_SECRET, 1).unwrap();

        match validate_access_token(&token, "wrong_secret") {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("signature")),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_token_invalid_format() {
        let result = validate_access_token("invalid.token.format", TEST_SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_expired_token() {
        // Negative hours to create an already expired token
        let token = generate_access_token("alice", TEST_SECRET, -1).unwrap();

        match validate_access_token(&token, TEST_SECRET) {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("expired")),
            other => panic!("Expected Unauthorized error for expired token, got {:?}", other),
        }
    }

    #[test]
    fn test_token_type_serialization() {
        let claims = Claims::new("alice".to_string(), TokenType::Access, 1);
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"token_type\":\"access\""));
    }
}
