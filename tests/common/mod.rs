//! Shared test doubles for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use bson::oid::ObjectId;

use account_service::api::{create_router, AppState};
use account_service::domain::User;
use account_service::errors::{AppError, AppResult, ErrorKind};
use account_service::infra::repositories::entities::parse_object_id;
use account_service::infra::{HealthCheck, UserRepository};
use account_service::services::UserManager;

/// Repository keeping users in memory with the same error classification
/// as the MongoDB store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<String> {
        if user.has_id() {
            return Err(AppError::new(ErrorKind::ConvertModel, "new user already has an id"));
        }

        let id = ObjectId::new().to_hex();
        user.id = id.clone();
        self.users.lock().unwrap().insert(id.clone(), user);
        Ok(id)
    }

    async fn get(&self, id: &str) -> AppResult<User> {
        parse_object_id(id)?;

        self.users
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::new(ErrorKind::GetOne, "no document matched"))
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, user: User) -> AppResult<()> {
        parse_object_id(&user.id)?;

        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(&user.id)
            .ok_or_else(|| AppError::new(ErrorKind::UpdateOne, "can not be matched"))?;

        stored.name = user.name;
        stored.email = user.email;
        stored.password = user.password;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        parse_object_id(id)?;

        self.users
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::new(ErrorKind::DeleteOne, "no document matched"))
    }
}

/// Health check with a fixed answer.
pub struct StubHealth(pub Option<String>);

impl StubHealth {
    pub fn healthy() -> Self {
        Self(None)
    }

    pub fn failing(reason: &str) -> Self {
        Self(Some(reason.to_string()))
    }
}

#[async_trait]
impl HealthCheck for StubHealth {
    async fn ping(&self) -> Result<(), String> {
        match &self.0 {
            None => Ok(()),
            Some(reason) => Err(reason.clone()),
        }
    }
}

/// Router wired to an empty in-memory repository.
pub fn test_app() -> Router {
    test_app_with_health(StubHealth::healthy())
}

pub fn test_app_with_health(health: StubHealth) -> Router {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = Arc::new(UserManager::new(repo));
    create_router(AppState::new(service, Arc::new(health)), None)
}
