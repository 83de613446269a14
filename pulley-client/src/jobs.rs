//! Job-related API endpoints

use reqwest::header;
use tracing::{debug, error, info};

use crate::CiClient;
use crate::error::{ClientError, Result};
use pulley_core::job::{CreatedJobs, JobStatusRecord};

impl CiClient {
    /// Trigger CI job(s) for a service
    ///
    /// Sends `POST /api/job/ci?qualifier=<q>[&instance=<i>]`. The qualifier
    /// selects the target service; the instance id disambiguates when the
    /// qualifier matches several running instances.
    ///
    /// Any transport failure, non-success status, or unparseable body is an
    /// error. Creation is never retried; callers are expected to fail fast.
    /// 4xx and 5xx responses are deliberately not distinguished.
    pub async fn create_jobs(
        &self,
        qualifier: &str,
        instance: Option<&str>,
    ) -> Result<CreatedJobs> {
        let url = format!("{}/api/job/ci", self.base_url());

        let mut query: Vec<(&str, &str)> = vec![("qualifier", qualifier)];
        if let Some(instance) = instance {
            query.push(("instance", instance));
        }

        debug!("Calling: POST {}", url);

        let response = self
            .client
            .post(&url)
            .query(&query)
            .basic_auth(&self.username, Some(&self.password))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Job creation returned status {} with body {}", status, body);
            return Err(ClientError::CreationFailed {
                status: status.as_u16(),
                body,
            });
        }

        self.parse_body(response).await
    }

    /// Fetch the status of a single job
    ///
    /// Sends `GET /api/job/<id>`. Returns `Ok(None)` when the API answers
    /// with a non-success status: the job is treated as not found, which
    /// is a per-job outcome rather than an error. Transport failures and
    /// unparseable bodies are errors and fatal to the whole run.
    pub async fn get_job(&self, job_id: &str) -> Result<Option<JobStatusRecord>> {
        let url = format!("{}/api/job/{}", self.base_url(), job_id);

        info!("Calling: GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let record = self.parse_body(response).await?;
        Ok(Some(record))
    }
}
