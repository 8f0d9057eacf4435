//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_APP_NAME, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_HTTP_HOST,
    DEFAULT_HTTP_PORT, DEFAULT_LOG_LEVEL,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub log_level: String,
    pub http: HttpConfig,
    pub database: DatabaseConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Per-request timeout; `None` leaves requests unbounded
    pub request_timeout: Option<Duration>,
}

impl HttpConfig {
    /// Get the full listener address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    password: Option<String>,
    /// Database the credentials are defined in
    pub auth_source: Option<String>,
    pub name: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("auth_source", &self.auth_source)
            .field("name", &self.name)
            .finish()
    }
}

impl DatabaseConfig {
    /// Connection string without credentials; those go through the driver's
    /// credential options so they never need URL escaping.
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }

    /// Username and password, only when both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) => Some((user, password)),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment (after `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Missing or unparseable values fall back to their defaults; empty
    /// strings count as missing.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let request_timeout = var("HTTP_REQUEST_TIMEOUT")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            app_name: or("APP_NAME", DEFAULT_APP_NAME),
            app_version: or("APP_VERSION", env!("CARGO_PKG_VERSION")),
            log_level: or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            http: HttpConfig {
                host: or("HTTP_HOST", DEFAULT_HTTP_HOST),
                port: var("HTTP_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_HTTP_PORT),
                request_timeout,
            },
            database: DatabaseConfig {
                host: or("DB_HOST", DEFAULT_DB_HOST),
                port: var("DB_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_DB_PORT),
                username: var("DB_USERNAME"),
                password: var("DB_PASSWORD"),
                auth_source: var("DB_AUTH"),
                name: or("DB_NAME", DEFAULT_DB_NAME),
            },
        }
    }
}
