use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::EMPTY_LIST_MESSAGE;
use crate::domain::{User, UserResponse};

/// Identifier of a created or updated record
#[derive(Debug, Serialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = "65f1a2b3c4d5e6f708192a3b")]
    pub id: String,
}

impl IdResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Single user wrapped under `user`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self { user: user.into() }
    }
}

/// Either the users or the literal "list is empty" marker
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum UserList {
    Users(Vec<UserResponse>),
    Empty(String),
}

/// User listing wrapped under `users`
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersEnvelope {
    pub users: UserList,
}

impl UsersEnvelope {
    pub fn from_users(users: Vec<User>) -> Self {
        let users = if users.is_empty() {
            UserList::Empty(EMPTY_LIST_MESSAGE.to_string())
        } else {
            UserList::Users(users.into_iter().map(UserResponse::from).collect())
        };

        Self { users }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// No content response helper (common pattern for DELETE endpoints)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
