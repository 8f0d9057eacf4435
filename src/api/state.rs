//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::HealthCheck;
use crate::services::UserService;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Storage liveness check
    pub health: Arc<dyn HealthCheck>,
    /// Reported by `/health`
    pub version: String,
}

impl AppState {
    /// Create new application state with injected services.
    pub fn new(user_service: Arc<dyn UserService>, health: Arc<dyn HealthCheck>) -> Self {
        Self {
            user_service,
            health,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version reported by `/health`.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
