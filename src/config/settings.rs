//! # Configuration Settings
//!
//! Defines the configuration structure for the admin service.

use crate::errors::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use validator::Validate;

/// Default number of reports shown on a listing page
pub const DEFAULT_REPORTS_PER_PAGE: i64 = 100;

/// Default idle lifetime of an admin session (24 hours)
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Default session cookie name
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "repology_admin_session";

/// Default upper bound on concurrently stored sessions
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[validate(nested)]
    pub server: ServerConfig,

    /// Database configuration
    #[validate(nested)]
    pub database: DatabaseConfig,

    /// Admin login and listing configuration
    #[validate(nested)]
    pub admin: AdminConfig,

    /// Session cookie configuration
    #[validate(nested)]
    pub session: SessionConfig,

    /// Logging configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(AdminError::from)?;
        self.validate_custom()
    }

    fn validate_custom(&self) -> Result<()> {
        if !self.database.is_sqlite() {
            return Err(AdminError::validation_field(
                "Database URL must start with 'sqlite:'",
                "database.url",
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(AdminError::validation(
                "min_connections cannot be greater than max_connections",
            ));
        }

        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// Server port
    #[validate(range(min = 1, message = "Port must be between 1 and 65535"))]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 5000 }
    }
}

impl ServerConfig {
    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[validate(length(min = 1, message = "Database URL cannot be empty"))]
    pub url: String,

    /// Maximum number of connections in the pool
    #[validate(range(min = 1, max = 100, message = "Max connections must be between 1 and 100"))]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[validate(range(max = 50, message = "Min connections must be between 0 and 50"))]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[validate(range(
        min = 1,
        max = 60,
        message = "Connect timeout must be between 1 and 60 seconds"
    ))]
    pub connect_timeout_seconds: u64,

    /// Idle timeout in seconds (0 = no timeout)
    pub idle_timeout_seconds: u64,

    /// Run embedded migrations when the pool is created
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./data/repology.db".to_string(),
            max_connections: 10,
            min_connections: 0,
            connect_timeout_seconds: 10,
            idle_timeout_seconds: 600,
            auto_migrate: true,
        }
    }
}

impl DatabaseConfig {
    /// Get connection timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Get idle timeout as Duration (None if 0)
    pub fn idle_timeout(&self) -> Option<Duration> {
        if self.idle_timeout_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.idle_timeout_seconds))
        }
    }

    /// Check if this is a SQLite configuration
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }
}

/// Admin login and page configuration
#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AdminConfig {
    /// Shared admin password. Login is disabled when unset.
    pub password: Option<String>,

    /// Number of reports shown on each report listing
    #[validate(range(min = 1, max = 10000, message = "Reports per page must be between 1 and 10000"))]
    pub reports_per_page: i64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { password: None, reports_per_page: DEFAULT_REPORTS_PER_PAGE }
    }
}

impl AdminConfig {
    /// Whether admin login is possible at all. An empty password counts as unset.
    pub fn login_enabled(&self) -> bool {
        self.password.as_deref().is_some_and(|password| !password.is_empty())
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("reports_per_page", &self.reports_per_page)
            .finish()
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    #[validate(length(min = 1, message = "Cookie name cannot be empty"))]
    pub cookie_name: String,

    /// Idle lifetime of a session in hours
    #[validate(range(min = 1, max = 720, message = "Session TTL must be between 1 and 720 hours"))]
    pub ttl_hours: i64,

    /// Mark the cookie `Secure` (HTTPS only)
    pub secure_cookie: bool,

    /// Sessions kept in memory before the least recently seen are evicted
    #[validate(range(min = 1, message = "max_sessions must be at least 1"))]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            secure_cookie: false,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl SessionConfig {
    /// Session idle lifetime as a chrono duration
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.ttl_hours)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Service name reported in startup logs
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Default filter directive when `RUST_LOG` is not set
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "repology-admin".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
