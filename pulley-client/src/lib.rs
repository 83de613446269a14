//! Pulley HTTP Client
//!
//! A small, type-safe HTTP client for the CI job API.
//!
//! The client covers the two calls the CLI needs: triggering CI jobs and
//! fetching the status of a single job. Authentication is HTTP Basic; TLS
//! certificate verification is configurable and off by default because
//! the API is typically deployed with self-signed certificates.
//!
//! # Example
//!
//! ```no_run
//! use pulley_client::{CiClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://ci.example.com", "user", "secret");
//!     let client = CiClient::new(config)?;
//!
//!     let created = client.create_jobs("webserver", None).await?;
//!     for job in created.jobs.unwrap_or_default() {
//!         println!("Created job: {}", job.job);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod jobs;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use pulley_core::job::{CreatedJobs, JobRef, JobStatusRecord};

use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("pulley/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the CI job API
#[derive(Debug, Clone)]
pub struct CiClient {
    /// Base URL of the CI API (e.g., "https://ci.example.com")
    base_url: String,
    /// Basic-auth credentials attached to every request
    username: String,
    password: String,
    /// HTTP client instance
    client: Client,
}

impl CiClient {
    /// Create a new CI API client
    ///
    /// Validates the configuration and builds a `reqwest::Client` with the
    /// configured timeout, TLS settings, and the headers the API expects
    /// (`Accept`, `User-Agent`, `Connection: close`).
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(header::CONNECTION, HeaderValue::from_static("close"));

        let mut builder = Client::builder()
            .timeout(config.http_timeout)
            .default_headers(headers);

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            password: config.password,
            client,
        })
    }

    /// Get the base URL of the CI API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// The status code must already have been checked by the caller; this
    /// only turns the body into a typed value.
    async fn parse_body<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse JSON response: {}", e)))
    }
}
