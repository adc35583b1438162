//! Authentication handler issuing access tokens.

use axum::{extract::State, http::StatusCode};

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{ApiResponse, LoginRequest, LoginResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::jwt::generate_access_token;
use crate::utils::validate::ValidatedJson;

/// POST /auth/login - Authenticate user
///
/// Verifies the username/password pair and returns a bearer access token.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let user = state
        .services
        .users
        .authenticate(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| {
            tracing::info!(username = %payload.username, "Login rejected");
            AppError::Unauthorized {
                message: "Invalid username or password".to_string(),
            }
        })?;

    let hours = state.jwt_config.access_token_expiration;
    let token = generate_access_token(&user.username, &state.jwt_config.secret, hours)?;
    tracing::info!(username = %user.username, "Login successful");

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Login successful",
        LoginResponse::bearer(token, hours),
    ))
}
