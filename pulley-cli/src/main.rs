//! Pulley CLI
//!
//! Triggers CI jobs against a remote CI API and waits for them to
//! finish. The process exit code is the sum of the per-job return codes,
//! or 1 when job creation or the transport fails.

mod cli;
mod poller;

use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, LogLevel};
use crate::poller::JobPoller;
use pulley_client::{CiClient, ClientConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.log_level);

    match run(cli).await {
        Ok(code) => {
            if code == 0 {
                info!("All jobs finished successfully");
            } else {
                error!("Finished with accumulated exit code {}", code);
            }
            process::exit(code);
        }
        Err(e) => {
            error!("Failed to run CI jobs: {:#}", e);
            process::exit(1);
        }
    }
}

/// Initialize logging
///
/// The `--log-level` flag sets the default filter; an explicit `RUST_LOG`
/// still takes precedence.
fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let config = ClientConfig::new(cli.url, cli.username, cli.password)
        .with_http_timeout(Duration::from_secs(cli.http_timeout))
        .with_tls_verify(cli.tls_verify);

    let client = CiClient::new(config)?;

    let poller = JobPoller::new(
        client,
        Duration::from_secs(cli.job_wait_timeout),
        Duration::from_secs(cli.job_finish_timeout),
    )?;

    let code = poller.run(&cli.qualifier, cli.instance.as_deref()).await?;
    Ok(code)
}
