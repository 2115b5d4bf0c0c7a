//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults match the demo catalog the
//! original storefront ships against.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_API_URL` - Base URL of the remote catalog REST API
//!   (default: `https://api.escuelajs.co/api/v1`)
//! - `STOREFRONT_DATA_DIR` - Directory for durable client-side state
//!   (cart, auth token; default: ./data)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default base URL of the public demo catalog.
pub const DEFAULT_CATALOG_API_URL: &str = "https://api.escuelajs.co/api/v1";

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
    /// Base URL of the remote catalog API (no trailing slash)
    pub catalog_api_url: Url,
    /// Directory holding the persisted cart and auth token entries
    pub data_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let catalog_api_url = parse_catalog_url(&get_env_or_default(
            "CATALOG_API_URL",
            DEFAULT_CATALOG_API_URL,
        ))?;
        let data_dir = PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", "./data"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            catalog_api_url,
            data_dir,
            sentry_dsn,
            sentry_environment,
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

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and normalize the catalog base URL (trailing slash trimmed so
/// endpoint paths can be appended uniformly).
fn parse_catalog_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_API_URL".to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "CATALOG_API_URL".to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_url_trims_trailing_slash() {
        let url = parse_catalog_url("https://api.example.com/api/v1/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1");
    }

    #[test]
    fn test_parse_catalog_url_rejects_non_http_schemes() {
        let result = parse_catalog_url("ftp://api.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_catalog_url_rejects_garbage() {
        assert!(parse_catalog_url("not a url").is_err());
    }

    #[test]
    fn test_default_catalog_url_is_valid() {
        assert!(parse_catalog_url(DEFAULT_CATALOG_API_URL).is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog_api_url: parse_catalog_url(DEFAULT_CATALOG_API_URL).unwrap(),
            data_dir: PathBuf::from("./data"),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
