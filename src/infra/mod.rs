//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! database connections and the repositories built on them.

pub mod db;
pub mod repositories;

pub use db::{Database, DatabaseError, HealthCheck};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use db::MockHealthCheck;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
