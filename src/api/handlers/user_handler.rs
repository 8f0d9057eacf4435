//! User account handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{UserId, ValidatedJson};
use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppResult;
use crate::types::{Created, IdResponse, NoContent, UserEnvelope, UsersEnvelope};

/// Signup and update request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// User display name
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    #[schema(example = "Alice", min_length = 2)]
    pub name: String,
    /// User email address
    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "a@x.io")]
    pub email: String,
    /// User password (minimum 6 characters)
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User::new(payload.name, payload.email, payload.password)
    }
}

/// Create user routes, mounted under `/api/v1`
pub fn user_routes() -> Router<AppState> {
    // Without the id segment the handlers answer with a URL parameter error
    let user = || {
        post(signup)
            .get(get_user_info)
            .put(update_user_info)
            .delete(delete_user_account)
    };

    Router::new()
        .route("/user", user())
        .route("/user/", user())
        .route(
            "/user/:id",
            get(get_user_info)
                .put(update_user_info)
                .delete(delete_user_account),
        )
        .route("/users", get(get_all_users_info))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/user",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = IdResponse),
        (status = 400, description = "Payload failed to bind or validate", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Created<IdResponse>> {
    let id = state.user_service.signup(payload.into()).await?;

    Ok(Created(IdResponse::new(id)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 400, description = "Missing id", body = crate::errors::ErrorResponse),
        (status = 500, description = "Malformed id or storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user_info(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<UserEnvelope>> {
    let user = state.user_service.get_user_info(&id).await?;

    Ok(Json(user.into()))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "Users, or the string \"list is empty\"", body = UsersEnvelope),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_all_users_info(State(state): State<AppState>) -> AppResult<Json<UsersEnvelope>> {
    let users = state.user_service.get_all_users_info().await?;

    Ok(Json(UsersEnvelope::from_users(users)))
}

/// Replace a user's name, email and password
#[utoipa::path(
    put,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = IdResponse),
        (status = 400, description = "Missing id or invalid payload", body = crate::errors::ErrorResponse),
        (status = 500, description = "Malformed id, no match or storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_user_info(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Json<IdResponse>> {
    let user = User::from(payload).with_id(id);
    let id = user.id.clone();

    state.user_service.update_user_info(user).await?;

    Ok(Json(IdResponse::new(id)))
}

/// Permanently delete a user
#[utoipa::path(
    delete,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Missing id", body = crate::errors::ErrorResponse),
        (status = 500, description = "Malformed id, no match or storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_user_account(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<NoContent> {
    state.user_service.delete_user_account(&id).await?;

    Ok(NoContent)
}
