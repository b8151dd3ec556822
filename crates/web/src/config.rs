//! Front-end configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PEDIDOS_HOST` - Bind address (default: 127.0.0.1)
//! - `PEDIDOS_PORT` - Listen port (default: 3000)
//! - `ORDER_SERVICE_URL` - Order service base URL
//!   (default: `http://localhost:3002`)
//! - `CUSTOMER_SERVICE_URL` - Customer service base URL
//!   (default: `http://localhost:3001`)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Front-end application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Order service base URL, no trailing slash
    pub order_service_url: String,
    /// Customer service base URL, no trailing slash
    pub customer_service_url: String,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed
    /// as its expected type.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PEDIDOS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PEDIDOS_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("PEDIDOS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PEDIDOS_PORT".to_owned(), e.to_string()))?;
        let order_service_url =
            get_base_url("ORDER_SERVICE_URL", "http://localhost:3002")?;
        let customer_service_url =
            get_base_url("CUSTOMER_SERVICE_URL", "http://localhost:3001")?;

        Ok(Self {
            host,
            port,
            order_service_url,
            customer_service_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Load a service base URL, validating it and trimming any trailing slash.
fn get_base_url(key: &str, default: &str) -> Result<String, ConfigError> {
    let raw = get_env_or_default(key, default);
    normalize_base_url(&raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e))
}

/// Validate a base URL and strip the trailing slash so endpoint paths can
/// be appended with a plain `format!`.
fn normalize_base_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme: {}", url.scheme()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:3002/").unwrap(),
            "http://localhost:3002"
        );
        assert_eq!(
            normalize_base_url("https://orders.internal").unwrap(),
            "https://orders.internal"
        );
    }

    #[test]
    fn normalize_rejects_garbage() {
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("ftp://orders.internal").is_err());
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = WebConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            order_service_url: "http://localhost:3002".to_owned(),
            customer_service_url: "http://localhost:3001".to_owned(),
        };
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
