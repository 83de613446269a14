//! Job poller
//!
//! Drives the polling state machine: trigger CI job(s), then poll each
//! returned job id until it reaches a terminal state or the finish
//! timeout elapses, and fold the per-job return codes into one exit code.
//!
//! Jobs are polled strictly sequentially, one at a time in list order.
//! There is no cumulative cap across jobs: each job gets the full finish
//! timeout, so total wall-clock time grows with the number of jobs.

use std::time::Duration;

use serde_json::Value;
use tokio::time;
use tracing::{error, info};

use pulley_client::{CiClient, ClientError, Result};
use pulley_core::job::JobStatusRecord;

/// Return code recorded for a job that timed out or was not found
const FAILURE_CODE: i32 = 1;

/// Sequential poller for CI jobs
pub struct JobPoller {
    client: CiClient,
    /// Lower bound on the time between two status checks of one job
    wait_interval: Duration,
    /// Budget of accumulated wait time per job before polling gives up
    finish_timeout: Duration,
}

impl JobPoller {
    /// Creates a new job poller
    ///
    /// The wait interval must be nonzero: it is the only thing that
    /// advances the elapsed counter, so a zero interval would turn the
    /// polling loop into a busy loop that never reaches the finish
    /// timeout.
    pub fn new(
        client: CiClient,
        wait_interval: Duration,
        finish_timeout: Duration,
    ) -> Result<Self> {
        if wait_interval.is_zero() {
            return Err(ClientError::Config(
                "wait_interval must be greater than 0".into(),
            ));
        }

        Ok(Self {
            client,
            wait_interval,
            finish_timeout,
        })
    }

    /// Triggers CI jobs and waits for all of them
    ///
    /// Returns the sum of the per-job return codes, which becomes the
    /// process exit code. A creation failure or a creation response
    /// without a job list is an error; both are fatal and nothing is
    /// polled. So is any transport failure during polling.
    pub async fn run(&self, qualifier: &str, instance: Option<&str>) -> Result<i32> {
        let created = self.client.create_jobs(qualifier, instance).await?;

        let Some(jobs) = created.jobs else {
            error!("No jobs found in creation response");
            return Err(ClientError::MissingJobs);
        };

        info!("Created {} job(s) for qualifier {}", jobs.len(), qualifier);

        let mut exit_code = 0;
        for job in &jobs {
            exit_code += self.poll_until_terminal(&job.job).await?;
        }

        Ok(exit_code)
    }

    /// Polls a single job until it finishes or the timeout elapses
    ///
    /// Returns the job's own return code once a terminal state is
    /// observed (a nonzero code is a successfully observed outcome, not
    /// an error). A job that times out or is not known to the API counts
    /// as [`FAILURE_CODE`]. Only the configured wait intervals count
    /// against the timeout budget; time spent in the status calls
    /// themselves does not.
    pub async fn poll_until_terminal(&self, job_id: &str) -> Result<i32> {
        let mut elapsed = Duration::ZERO;

        loop {
            if elapsed > self.finish_timeout {
                error!(
                    "Job {} did not finish within {:?}",
                    job_id, self.finish_timeout
                );
                return Ok(FAILURE_CODE);
            }

            let Some(record) = self.client.get_job(job_id).await? else {
                error!("Job {} not found", job_id);
                return Ok(FAILURE_CODE);
            };

            if record.is_finished() {
                info!(
                    "Job {} finished with state {}.\nOutput:\n{}",
                    job_id,
                    record.status_label(),
                    render_result(&record)
                );
                return Ok(record.return_code());
            }

            info!("Waiting {:?} before next status check ...", self.wait_interval);
            time::sleep(self.wait_interval).await;
            elapsed += self.wait_interval;
        }
    }
}

/// Renders the result payload of a finished job for logging
///
/// String payloads are printed as-is; structured payloads are
/// pretty-printed.
fn render_result(record: &JobStatusRecord) -> String {
    match &record.job_result {
        Some(Value::String(text)) => text.clone(),
        Some(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        None => "(no output)".to_string(),
    }
}
