//! Path identifier extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// The `:id` segment of a user route.
///
/// Routes registered without the parameter (such as `/user/`) and blank
/// values are rejected as a URL parameter error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::url_params(format!("could not get user id: {}", e.body_text())))?;

        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::url_params("could not get user id: id is empty"));
        }

        Ok(UserId(id.to_string()))
    }
}
