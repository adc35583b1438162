//! The response envelope shared by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response wrapper.
///
/// The HTTP status of the rendered response always equals `status_code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human readable outcome
    #[schema(example = "User created successfully")]
    pub message: String,
    /// Payload, `null` when there is nothing to return
    pub data: Option<T>,
    /// HTTP status code of the response
    #[schema(example = 201)]
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn new(success: bool, status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success,
            message: message.into(),
            data,
            status_code: status.as_u16(),
        }
    }

    /// A successful envelope carrying `data`.
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self::new(true, status, message, Some(data))
    }

    /// A successful envelope with a `null` payload.
    pub fn success_empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(true, status, message, None)
    }

    /// A failed envelope with a `null` payload.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(false, status, message, None)
    }

    /// Status as an axum [`StatusCode`].
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_serializes_with_camel_case_and_null_data() {
        let envelope: ApiResponse<Value> = ApiResponse::failure(StatusCode::CONFLICT, "Username ready");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            json,
            json!({
                "success": false,
                "message": "Username ready",
                "data": null,
                "statusCode": 409
            })
        );
    }

    #[test]
    fn test_success_carries_data() {
        let envelope = ApiResponse::success(StatusCode::NOT_FOUND, "Data empty", Vec::<u8>::new());

        assert!(envelope.success);
        assert_eq!(envelope.data, Some(vec![]));
        assert_eq!(envelope.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_into_response_uses_status_code() {
        let envelope = ApiResponse::success(StatusCode::CREATED, "User successfully", vec![1, 2]);
        let response = envelope.into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["data"], json!([1, 2]));
    }
}
