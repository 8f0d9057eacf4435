//! User repository backed by a MongoDB collection.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::Collection;

use super::entities::{parse_object_id, UserDocument};
use crate::config::DB_OPERATION_TIMEOUT;
use crate::domain::User;
use crate::errors::{AppError, AppResult, ErrorKind};

/// Persistence operations for users.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user that has no id yet; returns the assigned id.
    async fn create(&self, user: User) -> AppResult<String>;

    /// Fetch one user by id.
    async fn get(&self, id: &str) -> AppResult<User>;

    /// Fetch every stored user; an empty collection is not an error.
    async fn get_all(&self) -> AppResult<Vec<User>>;

    /// Overwrite name, email and password of an existing user.
    async fn update(&self, user: User) -> AppResult<()>;

    /// Physically remove a user.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// MongoDB implementation of [`UserRepository`].
#[derive(Clone)]
pub struct UserStore {
    collection: Collection<UserDocument>,
    timeout: Duration,
}

impl UserStore {
    pub fn new(collection: Collection<UserDocument>) -> Self {
        Self {
            collection,
            timeout: DB_OPERATION_TIMEOUT,
        }
    }

    /// Override the per-operation deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run a driver call under the store deadline, classifying failures as `kind`.
    async fn bounded<T, F>(&self, kind: ErrorKind, action: &str, fut: F) -> AppResult<T>
    where
        F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(AppError::new(kind, format!("failed to {action}: {e}"))),
            Err(_) => Err(AppError::new(
                kind,
                format!("failed to {action}: timed out after {:?}", self.timeout),
            )),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<String> {
        let document = UserDocument::for_insert(&user)?;

        let result = self
            .bounded(
                ErrorKind::CreateOne,
                "insert user",
                self.collection.insert_one(document),
            )
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::convert(format!(
                "inserted id {} is not an object id",
                result.inserted_id
            ))
        })?;

        tracing::debug!(user_id = %id, "User created");
        Ok(id.to_hex())
    }

    async fn get(&self, id: &str) -> AppResult<User> {
        let oid = parse_object_id(id)?;

        self.bounded(
            ErrorKind::GetOne,
            "get user",
            self.collection.find_one(doc! { "_id": oid }),
        )
        .await?
        .map(User::from)
        .ok_or_else(|| {
            AppError::new(
                ErrorKind::GetOne,
                format!("failed to get user: no document matched id {id}"),
            )
        })
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let documents = self
            .bounded(ErrorKind::GetAll, "get users", async {
                let cursor = self.collection.find(doc! {}).await?;
                cursor.try_collect::<Vec<UserDocument>>().await
            })
            .await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: User) -> AppResult<()> {
        let (oid, document) = UserDocument::for_update(&user)?;

        let mut fields = bson::to_document(&document).map_err(|e| {
            AppError::new(
                ErrorKind::Decode,
                format!("failed to marshal user {}: {e}", user.id),
            )
        })?;
        fields.remove("_id");

        let result = self
            .bounded(
                ErrorKind::UpdateOne,
                "update user",
                self.collection
                    .update_one(doc! { "_id": oid }, doc! { "$set": fields }),
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::new(
                ErrorKind::UpdateOne,
                format!("user with id {} can not be matched", user.id),
            ));
        }

        tracing::debug!(user_id = %user.id, "User updated");
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let oid = parse_object_id(id)?;

        let result = self
            .bounded(
                ErrorKind::DeleteOne,
                "delete user",
                self.collection.delete_one(doc! { "_id": oid }),
            )
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::new(
                ErrorKind::DeleteOne,
                format!("user with id {id} can not be deleted: no document matched"),
            ));
        }

        tracing::debug!(user_id = %id, "User deleted");
        Ok(())
    }
}
