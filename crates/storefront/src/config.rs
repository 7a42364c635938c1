//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `FOODHUB_HOST` - Bind address (default: 127.0.0.1)
//! - `FOODHUB_PORT` - Listen port (default: 3000)
//! - `FOODHUB_SEED_PATH` - YAML seed file (default: built-in demo catalog)
//! - `FOODHUB_ACTIVITY_CAPACITY` - Recent updates kept per shop (default: 5, max: 1000)
//! - `FOODHUB_DUPLICATE_ITEM_IDS` - `allow` or `reject` (default: allow)
//! - `FOODHUB_SECURE_COOKIES` - Mark the session cookie `Secure` (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use foodhub_core::{DEFAULT_CAPACITY, DuplicatePolicy, RegistryOptions};
use thiserror::Error;

/// Largest accepted `FOODHUB_ACTIVITY_CAPACITY`.
pub const MAX_ACTIVITY_CAPACITY: usize = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Seed file to build the catalog from
    pub seed_path: Option<PathBuf>,
    /// Activity log capacity per shop
    pub activity_capacity: usize,
    /// How the catalog treats duplicate item ids
    pub duplicate_policy: DuplicatePolicy,
    /// Whether session cookies require HTTPS
    pub secure_cookies: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            seed_path: None,
            activity_capacity: DEFAULT_CAPACITY,
            duplicate_policy: DuplicatePolicy::Allow,
            secure_cookies: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("FOODHUB_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOODHUB_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FOODHUB_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOODHUB_PORT".to_string(), e.to_string()))?;
        let activity_capacity =
            parse_capacity(&get_env_or_default("FOODHUB_ACTIVITY_CAPACITY", "5"))?;
        let duplicate_policy =
            parse_duplicate_policy(&get_env_or_default("FOODHUB_DUPLICATE_ITEM_IDS", "allow"))?;
        let secure_cookies = parse_bool(
            "FOODHUB_SECURE_COOKIES",
            &get_env_or_default("FOODHUB_SECURE_COOKIES", "false"),
        )?;

        Ok(Self {
            host,
            port,
            seed_path: get_optional_env("FOODHUB_SEED_PATH").map(PathBuf::from),
            activity_capacity,
            duplicate_policy,
            secure_cookies,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Options for building the catalog registry.
    #[must_use]
    pub const fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            log_capacity: self.activity_capacity,
            duplicate_policy: self.duplicate_policy,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_capacity(value: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| {
        ConfigError::InvalidEnvVar("FOODHUB_ACTIVITY_CAPACITY".to_string(), reason)
    };
    let capacity = value
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid(e.to_string()))?;
    if capacity > MAX_ACTIVITY_CAPACITY {
        return Err(invalid(format!(
            "at most {MAX_ACTIVITY_CAPACITY} allowed, got {capacity}"
        )));
    }
    Ok(capacity)
}

fn parse_duplicate_policy(value: &str) -> Result<DuplicatePolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "allow" => Ok(DuplicatePolicy::Allow),
        "reject" => Ok(DuplicatePolicy::Reject),
        other => Err(ConfigError::InvalidEnvVar(
            "FOODHUB_DUPLICATE_ITEM_IDS".to_string(),
            format!("expected 'allow' or 'reject', got '{other}'"),
        )),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
