//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

use std::time::Duration;

// =============================================================================
// Application
// =============================================================================

/// Default application name used in logs
pub const DEFAULT_APP_NAME: &str = "account-service";

/// Default log filter when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Time in-flight requests get to finish once shutdown starts
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

// =============================================================================
// Database
// =============================================================================

/// Default MongoDB host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default MongoDB port
pub const DEFAULT_DB_PORT: u16 = 27017;

/// Default database name
pub const DEFAULT_DB_NAME: &str = "accounts";

/// Upper bound for the initial connect + ping handshake
pub const DB_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for a single repository operation
pub const DB_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Collection holding user documents
pub const COLLECTION_USERS: &str = "users";

// =============================================================================
// Responses
// =============================================================================

/// Returned under `users` instead of an empty array
pub const EMPTY_LIST_MESSAGE: &str = "list is empty";

/// Body of the 404 fallback
pub const PAGE_NOT_FOUND_MESSAGE: &str = "page not found";
