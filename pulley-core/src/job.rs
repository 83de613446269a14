//! Job wire types
//!
//! Shapes of the two CI API responses: the job-creation response and the
//! per-job status record.

use serde::{Deserialize, Serialize};

/// Response body of a job-creation call
///
/// The API returns `{ "jobs": [ { "job": "<id>" }, ... ] }`. The `jobs`
/// key is kept optional so callers can treat its absence as a malformed
/// response instead of a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedJobs {
    pub jobs: Option<Vec<JobRef>>,
}

/// A single entry in the job-creation response
///
/// Entries may carry additional fields; only the job id is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRef {
    pub job: String,
}

/// Status record for a single job
///
/// A non-null `finished` value marks the terminal state. The return code
/// and result payload are only meaningful once the job is finished.
/// `job_result` may arrive as a plain string or as structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusRecord {
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub finished: Option<serde_json::Value>,
    #[serde(default)]
    pub job_returncode: Option<i32>,
    #[serde(default)]
    pub job_result: Option<serde_json::Value>,
}

impl JobStatusRecord {
    /// Whether the job has reached a terminal state
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Return code of a finished job
    ///
    /// A finished record without a return code is treated as a failure.
    pub fn return_code(&self) -> i32 {
        self.job_returncode.unwrap_or(1)
    }

    /// Human-readable status label for a finished job
    pub fn status_label(&self) -> &'static str {
        if self.return_code() == 0 {
            "successful"
        } else {
            "failed"
        }
    }
}
