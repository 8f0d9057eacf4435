//! Storage document definitions
//!
//! These are database-specific shapes separate from domain models.

pub mod user;

pub use user::{parse_object_id, UserDocument};
