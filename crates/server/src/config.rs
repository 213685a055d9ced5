//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CURIO_ADMIN_PASSWORD` - Password for the administrator account created
//!   at startup
//!
//! ## Optional
//! - `CURIO_HOST` - Bind address (default: 127.0.0.1)
//! - `CURIO_PORT` - Listen port (default: 3000)
//! - `CURIO_ADMIN_EMAIL` - Administrator email (default: admin@curio.test)
//! - `CURIO_SEED_DEMO` - Seed demo users and listings on startup
//!   (default: false)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

use curio_core::Email;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Marketplace server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Email of the distinguished administrator account
    pub admin_email: Email,
    /// Password for the administrator account
    pub admin_password: SecretString,
    /// Whether to seed demo users and listings at startup
    pub seed_demo: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CURIO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CURIO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CURIO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CURIO_PORT".to_string(), e.to_string()))?;

        let admin_email = Email::parse(&get_env_or_default("CURIO_ADMIN_EMAIL", "admin@curio.test"))
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CURIO_ADMIN_EMAIL".to_string(), e.to_string())
            })?;
        let admin_password = get_required_secret("CURIO_ADMIN_PASSWORD")?;

        let seed_demo = parse_bool(&get_env_or_default("CURIO_SEED_DEMO", "false"))
            .ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "CURIO_SEED_DEMO".to_string(),
                    "expected true/false".to_string(),
                )
            })?;

        Ok(Self {
            host,
            port,
            admin_email,
            admin_password,
            seed_demo,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a boolean flag ("true"/"false"/"1"/"0").
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            admin_email: Email::parse("admin@curio.test").unwrap(),
            admin_password: SecretString::from("correct horse battery staple"),
            seed_demo: false,
        }
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
