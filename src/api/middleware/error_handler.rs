//! Rendering of [`AppError`] as a response envelope.
//!
//! Errors that escape a handler or an extractor (guard rejections, body
//! validation) still reach the caller in the standard envelope shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::error::AppError;

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. }
        | AppError::Configuration { .. }
        | AppError::PasswordHash { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts an error into an envelope with a status chosen by the error kind.
pub fn error_envelope(error: &AppError) -> ApiResponse<Value> {
    let status = error_to_status_code(error);

    match error {
        AppError::ValidationErrors { errors } => ApiResponse::new(
            false,
            status,
            "Validation failed",
            serde_json::to_value(errors).ok(),
        ),
        AppError::BadRequest { message } | AppError::Unauthorized { message } => {
            ApiResponse::failure(status, message.clone())
        }
        AppError::NotFound { .. } | AppError::Duplicate { .. } | AppError::Validation { .. } => {
            ApiResponse::failure(status, error.to_string())
        }
        AppError::ConnectionPool { .. } => {
            ApiResponse::failure(status, "Database connection unavailable")
        }
        _ => ApiResponse::failure(status, "Internal server error"),
    }
}

/// Envelope for an unexpected failure caught at a handler boundary.
///
/// The status is fixed by the handler; `detail` controls whether the error
/// message, causes included, is exposed as the payload.
pub fn internal_failure(status: StatusCode, error: &AppError, detail: bool) -> ApiResponse<Value> {
    tracing::error!(error = ?error, status = status.as_u16(), "Request failed");
    let data = detail.then(|| Value::String(error_message(error)));
    ApiResponse::new(false, status, "Internal server error", data)
}

/// Renders an error and its source chain as `outer: cause: root`.
pub fn error_message(error: &AppError) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            tracing::error!(error = ?self, "Unhandled error");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        error_envelope(&self).into_response()
    }
}
