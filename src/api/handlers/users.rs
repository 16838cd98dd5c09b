//! User CRUD request handlers.

use crate::api::doc::USER_TAG;
use crate::api::dto::{ErrorResponse, UserRequest, UserResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::{JsonBody, PathId};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Creates user-related routes.
///
/// Routes:
/// - GET /users          - List all users
/// - POST /users         - Create a new user
/// - GET /users/{id}     - Get user by ID
/// - PUT /users/{id}     - Replace name and email
/// - DELETE /users/{id}  - Delete user by ID
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users, create_user))
        .routes(routes!(get_user, update_user, delete_user))
}

/// GET /users - List all users in insertion order
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id} - Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "No user with this id")
    )
)]
async fn get_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /users - Create a new user
///
/// Responds 201 with a `Location` header pointing at the new record.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse,
            headers(("Location" = String, description = "Path of the created user"))),
        (status = 400, description = "Invalid user data", body = String, content_type = "text/plain"),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    )
)]
async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .services
        .users
        .create_user(payload.into_new_user())
        .await?;
    let location = format!("/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

/// PUT /users/{id} - Replace a user's name and email
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid user data", body = String, content_type = "text/plain"),
        (status = 404, description = "No user with this id")
    )
)]
async fn update_user(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .services
        .users
        .update_user(id, payload.into_update_user())
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this id")
    )
)]
async fn delete_user(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    state.services.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
