//! Centralized error handling.
//!
//! Every layer reports failures as an [`AppError`]: a kind from the closed
//! [`ErrorKind`] taxonomy plus a human-readable message carrying the cause.
//! Errors travel unchanged up to the HTTP boundary, where they are rendered
//! exactly once.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::PAGE_NOT_FOUND_MESSAGE;

/// Closed set of failure kinds shared by every layer.
///
/// The display string is the machine-stable value clients branch on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("failed to decode")]
    Decode,

    #[error("failed to convert")]
    Convert,

    #[error("failed to convert domain model to repository model")]
    ConvertModel,

    #[error("failed to insert object into database")]
    CreateOne,

    #[error("failed to get object from database")]
    GetOne,

    #[error("failed to get all objects from database")]
    GetAll,

    #[error("failed to update object in database")]
    UpdateOne,

    #[error("failed to delete object from database")]
    DeleteOne,

    #[error("failed to validate or bind payload value")]
    ValidatePayload,

    #[error("failed to get param from query url")]
    GetUrlParams,
}

impl ErrorKind {
    /// HTTP status this kind is rendered with.
    pub const fn status(self) -> StatusCode {
        match self {
            ErrorKind::Decode
            | ErrorKind::Convert
            | ErrorKind::ConvertModel
            | ErrorKind::CreateOne
            | ErrorKind::GetOne
            | ErrorKind::GetAll
            | ErrorKind::UpdateOne
            | ErrorKind::DeleteOne => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::ValidatePayload | ErrorKind::GetUrlParams => StatusCode::BAD_REQUEST,
        }
    }
}

/// Application error: a taxonomy kind paired with free-form context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn convert(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Convert, msg)
    }

    pub fn validate_payload(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidatePayload, msg)
    }

    pub fn url_params(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GetUrlParams, msg)
    }
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable taxonomy message
    #[schema(example = "failed to get object from database")]
    pub error: String,
    /// Free-form context, not guaranteed stable
    #[schema(example = "failed to get user: no document matched the given id")]
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind.status();

        if status.is_server_error() {
            tracing::error!(kind = ?self.kind, message = %self.message, "request failed");
        } else {
            tracing::warn!(kind = ?self.kind, message = %self.message, "request rejected");
        }

        let body = ErrorResponse {
            error: self.kind.to_string(),
            message: self.message,
        };

        (status, Json(body)).into_response()
    }
}

/// Body for requests that match no route.
#[derive(Debug, Serialize)]
struct NotFoundBody {
    error: &'static str,
}

/// Fallback response for anything outside the taxonomy.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: PAGE_NOT_FOUND_MESSAGE,
        }),
    )
        .into_response()
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
