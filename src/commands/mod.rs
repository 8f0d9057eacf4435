//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod serve;

use thiserror::Error;

use crate::infra::DatabaseError;
use crate::server::ServerError;

/// Failure of a CLI command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("database connection failed: {0}")]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
