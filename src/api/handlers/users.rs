//! User request handlers.
//!
//! Every outcome, including unexpected failures, is returned as an
//! [`ApiResponse`] envelope. Failure status codes differ per endpoint:
//! create and list report 400, get and delete-all report 500.

use axum::{
    Extension, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
};
use serde_json::Value;

use crate::api::doc::USER_TAG;
use crate::api::dto::{ApiResponse, CreateUserRequest, UserResponse};
use crate::api::middleware::{AuthUser, auth_middleware, internal_failure};
use crate::services::CreateUserOutcome;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

type Failure = ApiResponse<Value>;

/// Creates user-related routes.
///
/// Routes:
/// - POST /users              - Create a new user
/// - GET /users               - List all users (guarded)
/// - DELETE /users            - Delete every user
/// - GET /users/{username}    - Get user by username (guarded)
pub fn user_routes(state: AppState) -> Router<AppState> {
    let guard = middleware::from_fn_with_state(state, auth_middleware);

    Router::new()
        .route(
            "/users",
            get(list_users)
                .route_layer(guard.clone())
                .post(create_user)
                .delete(delete_all_users),
        )
        .route("/users/{username}", get(get_user).route_layer(guard))
}

/// POST /users - Create a new user
///
/// The username is stored lowercased and the password bcrypt-hashed.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid body or unexpected failure"),
        (status = 409, description = "Username ready")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<ApiResponse<UserResponse>, Failure> {
    let outcome = state
        .services
        .users
        .create_user(payload.into_new_user())
        .await
        .map_err(|e| internal_failure(StatusCode::BAD_REQUEST, &e, true))?;

    Ok(match outcome {
        CreateUserOutcome::Created(user) => ApiResponse::success(
            StatusCode::CREATED,
            "User created successfully",
            user.into(),
        ),
        CreateUserOutcome::UsernameTaken => {
            ApiResponse::failure(StatusCode::CONFLICT, "Username ready")
        }
    })
}

/// GET /users - List all users
///
/// An empty collection is reported as 404 with `success=true`; a non-empty
/// one as 201.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "User successfully", body = ApiResponse<Vec<UserResponse>>),
        (status = 404, description = "Data empty", body = ApiResponse<Vec<UserResponse>>),
        (status = 401, description = "Missing or invalid token"),
        (status = 400, description = "Unexpected failure")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<ApiResponse<Vec<UserResponse>>, Failure> {
    let users = state
        .services
        .users
        .list_users()
        .await
        .map_err(|e| internal_failure(StatusCode::BAD_REQUEST, &e, true))?;

    tracing::debug!(requested_by = %auth.username, count = users.len(), "Listed users");

    if users.is_empty() {
        return Ok(ApiResponse::success(StatusCode::NOT_FOUND, "Data empty", Vec::new()));
    }

    let users = users.into_iter().map(UserResponse::from).collect();
    Ok(ApiResponse::success(StatusCode::CREATED, "User successfully", users))
}

/// GET /users/{username} - Get user by username
///
/// The path segment is matched verbatim.
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("username" = String, Path, description = "Exact username")),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiResponse<UserResponse>, Failure> {
    let user = state
        .services
        .users
        .get_user_by_username(&username)
        .await
        .map_err(|e| internal_failure(StatusCode::INTERNAL_SERVER_ERROR, &e, true))?;

    Ok(match user {
        Some(user) => ApiResponse::success(StatusCode::OK, "User retrieved successfully", user.into()),
        None => ApiResponse::failure(StatusCode::NOT_FOUND, "User not found"),
    })
}

/// DELETE /users - Delete every user
#[utoipa::path(
    delete,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Delete All successfully"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn delete_all_users(State(state): State<AppState>) -> Result<ApiResponse<()>, Failure> {
    state
        .services
        .users
        .delete_all_users()
        .await
        .map_err(|e| internal_failure(StatusCode::INTERNAL_SERVER_ERROR, &e, false))?;

    Ok(ApiResponse::success_empty(StatusCode::OK, "Delete All successfully"))
}
