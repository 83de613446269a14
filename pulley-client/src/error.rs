//! Error types for the CI API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the CI API
///
/// Every variant is fatal to the calling process: transport failures and
/// creation failures are never retried. A job that is merely not found
/// during polling is not an error; `CiClient::get_job` reports it as
/// `Ok(None)` so the caller can record a failed-job outcome and move on.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level (connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Job creation returned a non-success status code
    #[error("job creation failed (status {status}): {body}")]
    CreationFailed {
        /// HTTP status code
        status: u16,
        /// Response body returned by the API
        body: String,
    },

    /// Job creation succeeded but the response carried no job list
    #[error("creation response did not contain a job list")]
    MissingJobs,

    /// Failed to parse a response body
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
