//! Database connection and health probing.

use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use mongodb::{
    options::{ClientOptions, Credential},
    Client, Collection,
};
use thiserror::Error;

use crate::config::{DatabaseConfig, DB_CONNECT_TIMEOUT};

/// Failures while opening the storage connection
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("mongodb driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("mongodb did not answer ping within {0:?}")]
    Timeout(Duration),
}

/// Liveness check used by the `/health` endpoint.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip to the backing store; the error carries a readable reason.
    async fn ping(&self) -> Result<(), String>;
}

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
}

impl Database {
    /// Open a client and verify it with a ping.
    ///
    /// Credentials are attached only when both username and password are
    /// configured; otherwise the connection is anonymous.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let mut options = ClientOptions::parse(config.uri()).await?;
        options.connect_timeout = Some(DB_CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(DB_CONNECT_TIMEOUT);

        if let Some((username, password)) = config.credentials() {
            options.credential = Some(
                Credential::builder()
                    .username(username.to_string())
                    .password(password.to_string())
                    .source(config.auth_source.clone())
                    .build(),
            );
        }

        let client = Client::with_options(options)?;
        let db = Self {
            database: client.database(&config.name),
        };

        tokio::time::timeout(DB_CONNECT_TIMEOUT, db.run_ping())
            .await
            .map_err(|_| DatabaseError::Timeout(DB_CONNECT_TIMEOUT))??;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            authenticated = config.credentials().is_some(),
            "Database connected"
        );

        Ok(db)
    }

    /// Typed handle to a collection in the configured database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    async fn run_ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for Database {
    async fn ping(&self) -> Result<(), String> {
        self.run_ping().await.map_err(|e| e.to_string())
    }
}
