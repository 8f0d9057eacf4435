//! Repository layer - Data access abstraction
//!
//! Repositories hide the document store behind domain-typed operations
//! and classify every storage failure into the error taxonomy.

pub mod entities;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
