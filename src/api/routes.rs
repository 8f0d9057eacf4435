//! Application route configuration.

use std::time::Duration;

use axum::{response::Response, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::not_found;

/// Create the application router with all routes configured.
///
/// `request_timeout` bounds every request when set; elapsed requests are
/// answered with `408 Request Timeout`.
pub fn create_router(state: AppState, request_timeout: Option<Duration>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", user_routes())
        .fallback(page_not_found)
        .with_state(state);

    let router = match request_timeout {
        Some(timeout) => router.layer(TimeoutLayer::new(timeout)),
        None => router,
    };

    // Global middleware
    router.layer(TraceLayer::new_for_http())
}

async fn page_not_found() -> Response {
    not_found()
}
