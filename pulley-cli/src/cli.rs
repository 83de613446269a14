//! Command-line interface definition
//!
//! All parameters are flags; credentials and the API URL can also come
//! from the environment.

use clap::{Parser, ValueEnum};

/// Trigger CI jobs and wait for them to finish
#[derive(Debug, Parser)]
#[command(name = "pulley", version, about)]
pub struct Cli {
    /// Qualifier selecting the target service
    #[arg(long)]
    pub qualifier: String,

    /// Optional instance id when the qualifier matches several instances
    #[arg(long)]
    pub instance: Option<String>,

    /// Base URL of the CI API
    #[arg(long, env = "PULLEY_URL")]
    pub url: String,

    /// Username for the CI API
    #[arg(long, env = "PULLEY_USERNAME")]
    pub username: String,

    /// Password for the CI API
    #[arg(long, env = "PULLEY_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Seconds to wait between two status checks of the same job
    #[arg(long, default_value_t = 30)]
    pub job_wait_timeout: u64,

    /// Seconds a job may take to finish before polling gives up
    #[arg(long, default_value_t = 600)]
    pub job_finish_timeout: u64,

    /// Verify TLS certificates when talking to the API
    #[arg(long)]
    pub tls_verify: bool,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub http_timeout: u64,

    /// Log verbosity
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

/// Log verbosity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Include outgoing request details
    Debug,
    /// Progress and outcomes only
    Info,
}

impl LogLevel {
    /// Default tracing filter directive for this level
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter())
    }
}
