//! Domain layer - Core business entities.
//!
//! Models here are independent of storage and transport concerns.

pub mod user;

pub use user::{User, UserResponse};
