//! HTTP-level tests for the CI API client against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pulley_client::{CiClient, ClientConfig, ClientError};

// "user:pass" base64-encoded.
const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";

fn client_for(server: &MockServer) -> CiClient {
    let config = ClientConfig::new(server.uri(), "user", "pass")
        .with_http_timeout(Duration::from_secs(2));
    CiClient::new(config).unwrap()
}

#[tokio::test]
async fn create_jobs_returns_job_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/job/ci"))
        .and(query_param("qualifier", "webserver"))
        .and(header("Authorization", BASIC_AUTH))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [ { "job": "job-1" }, { "job": "job-2" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.create_jobs("webserver", None).await.unwrap();

    let jobs = created.jobs.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].job, "job-1");
    assert_eq!(jobs[1].job, "job-2");
}

#[tokio::test]
async fn create_jobs_passes_instance_param() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/job/ci"))
        .and(query_param("qualifier", "webserver"))
        .and(query_param("instance", "web-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.create_jobs("webserver", Some("web-03")).await.unwrap();
    assert_eq!(created.jobs.unwrap().len(), 0);
}

#[tokio::test]
async fn create_jobs_non_success_status_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/job/ci"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.create_jobs("webserver", None).await.unwrap_err();

    match err {
        ClientError::CreationFailed { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend down");
        }
        other => panic!("expected CreationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn create_jobs_unparseable_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/job/ci"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.create_jobs("webserver", None).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn get_job_parses_status_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/job/job-1"))
        .and(header("Authorization", BASIC_AUTH))
        .and(header("Connection", "close"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job": "job-1",
            "finished": "2025-01-01T00:00:00Z",
            "job_returncode": 3,
            "job_result": "tests failed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = client.get_job("job-1").await.unwrap().unwrap();

    assert!(record.is_finished());
    assert_eq!(record.return_code(), 3);
    assert_eq!(record.status_label(), "failed");
}

#[tokio::test]
async fn get_job_non_success_status_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/job/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = client.get_job("missing").await.unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn transport_failure_is_an_error() {
    // Nothing listens on this port; the connection is refused.
    let config = ClientConfig::new("http://127.0.0.1:9", "user", "pass")
        .with_http_timeout(Duration::from_secs(1));
    let client = CiClient::new(config).unwrap();

    let err = client.get_job("job-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
