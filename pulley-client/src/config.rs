//! Client configuration
//!
//! Connection settings for the CI API: base URL, Basic-auth credentials,
//! per-request timeout, and TLS verification.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Configuration for [`CiClient`](crate::CiClient)
///
/// The HTTP timeout bounds a single request, not a whole polling session;
/// the polling timeouts live with the poller.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the CI API (e.g., "https://ci.example.com")
    pub base_url: String,

    /// Username for HTTP Basic authentication
    pub username: String,

    /// Password for HTTP Basic authentication
    pub password: String,

    /// Per-request HTTP timeout
    pub http_timeout: Duration,

    /// Whether to verify TLS certificates
    ///
    /// Disabled by default; the API is commonly deployed internally with
    /// self-signed certificates.
    pub tls_verify: bool,
}

impl ClientConfig {
    /// Creates a configuration with default timeout and TLS settings
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            http_timeout: Duration::from_secs(10),
            tls_verify: false,
        }
    }

    /// Sets the per-request HTTP timeout
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Enables or disables TLS certificate verification
    pub fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::Config("base_url cannot be empty".into()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::Config(
                "base_url must start with http:// or https://".into(),
            ));
        }

        if self.http_timeout.is_zero() {
            return Err(ClientError::Config(
                "http_timeout must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let config = ClientConfig::new("https://ci.example.com", "user", "pass");
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(!config.tls_verify);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::new("https://ci.example.com", "user", "pass");
        assert!(config.validate().is_ok());

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        config.http_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("https://ci.example.com", "user", "pass")
            .with_http_timeout(Duration::from_secs(30))
            .with_tls_verify(true);

        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.tls_verify);
    }
}
