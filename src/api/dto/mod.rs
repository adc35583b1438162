//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `envelope` - The uniform response wrapper
//! - `user` - User-related request/response DTOs
//! - `auth` - Login request/response DTOs
//! - `health` - Health check DTOs

mod auth;
mod envelope;
mod health;
mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use envelope::ApiResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use user::{CreateUserRequest, UserResponse};
