//! User service - Handles user-related use cases.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user; returns the storage-assigned id
    async fn signup(&self, user: User) -> AppResult<String>;

    /// Get a single user by id
    async fn get_user_info(&self, id: &str) -> AppResult<User>;

    /// List every user; an empty list is a valid result
    async fn get_all_users_info(&self) -> AppResult<Vec<User>>;

    /// Replace name, email and password of the user identified by `user.id`
    async fn update_user_info(&self, user: User) -> AppResult<()>;

    /// Permanently delete a user
    async fn delete_user_account(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn signup(&self, mut user: User) -> AppResult<String> {
        user.stamp_visit(Utc::now());

        let id = self.repo.create(user).await?;
        tracing::info!(user_id = %id, "User signed up");
        Ok(id)
    }

    async fn get_user_info(&self, id: &str) -> AppResult<User> {
        self.repo.get(id).await
    }

    async fn get_all_users_info(&self) -> AppResult<Vec<User>> {
        self.repo.get_all().await
    }

    async fn update_user_info(&self, user: User) -> AppResult<()> {
        self.repo.update(user).await
    }

    async fn delete_user_account(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
