//! Account Service - user account CRUD over MongoDB
//!
//! An HTTP service exposing create/read/update/delete operations for user
//! accounts, with signal-driven graceful shutdown and a closed error
//! taxonomy shared by every layer.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases
//! - **infra**: MongoDB connection and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **server**: Listener supervisor with bounded graceful shutdown
//! - **types**: Shared response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Override the listen address
//! cargo run -- serve --host 127.0.0.1 --port 9000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod server;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserResponse};
pub use errors::{AppError, AppResult, ErrorKind};
pub use server::{Server, ServerError};
