//! Health check handler.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    pub version: String,
    pub database: ServiceStatus,
}

/// Individual service health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint with database connectivity check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "All dependencies reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.health.ping().await {
        Ok(()) => ServiceStatus {
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            ServiceStatus {
                status: "unhealthy".to_string(),
                error: Some(e),
            }
        }
    };

    let healthy = database.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: state.version.clone(),
        database,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infra::MockHealthCheck;
    use crate::services::MockUserService;

    fn state(check: MockHealthCheck) -> State<AppState> {
        let state = AppState::new(Arc::new(MockUserService::new()), Arc::new(check));
        State(state.with_version("9.9.9"))
    }

    #[tokio::test]
    async fn reports_healthy_when_ping_succeeds() {
        let mut check = MockHealthCheck::new();
        check.expect_ping().times(1).returning(|| Ok(()));

        let (status, Json(body)) = health(state(check)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, "9.9.9");
        assert!(body.database.error.is_none());
    }

    #[tokio::test]
    async fn reports_degraded_when_ping_fails() {
        let mut check = MockHealthCheck::new();
        check
            .expect_ping()
            .returning(|| Err("server selection timeout".to_string()));

        let (status, Json(body)) = health(state(check)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database.status, "unhealthy");
        assert_eq!(body.database.error.as_deref(), Some("server selection timeout"));
    }
}
