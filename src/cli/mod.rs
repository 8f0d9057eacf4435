//! CLI module - Command-line interface for the application.
//!
//! Provides the `serve` command, which starts the HTTP server.

pub mod args;

pub use args::{Cli, Commands, ServeArgs};
