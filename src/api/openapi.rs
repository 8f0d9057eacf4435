//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::UserResponse;
use crate::errors::ErrorResponse;
use crate::types::{IdResponse, UserEnvelope, UserList, UsersEnvelope};

/// OpenAPI documentation for the account service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Service",
        version = "0.1.0",
        description = "User account CRUD over MongoDB",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        user_handler::signup,
        user_handler::get_user_info,
        user_handler::get_all_users_info,
        user_handler::update_user_info,
        user_handler::delete_user_account,
        health_handler::health,
    ),
    components(
        schemas(
            UserResponse,
            user_handler::UserPayload,
            IdResponse,
            UserEnvelope,
            UserList,
            UsersEnvelope,
            ErrorResponse,
            health_handler::HealthResponse,
            health_handler::ServiceStatus,
        )
    ),
    tags(
        (name = "Users", description = "User account operations"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in ["/api/v1/user", "/api/v1/user/{id}", "/api/v1/users", "/health"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
