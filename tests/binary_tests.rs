//! Runs the reporter binary against a mocked Strava API and checks stdout and exit status.

use std::process::Output;
use serde_json::{json, Value};
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_server(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete/activities"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

// The working directory has no conf/application.yaml, so only the environment is used
async fn run_binary(server: &MockServer) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_activity_reporter"))
        .current_dir(std::env::temp_dir())
        .env("STRAVA_ACCESS_TOKEN", "secret")
        .env("STRAVA_API_URL", server.uri())
        .env_remove("RUST_LOG")
        .output()
        .await;
    assert!(output.is_ok());
    output.unwrap()
}

#[tokio::test]
async fn test_exit_success_with_lines() {
    let server = start_server(200, json!([
        {"id": 1, "name": "a", "distance": 1000, "start_date_local": "2024-01-01T00:00:00Z"},
        {"id": 2, "name": "b", "distance": 2500.5, "start_date_local": "2024-01-02T00:00:00Z"}
    ])).await;

    let output = run_binary(&server).await;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout),
        "Activity ID: 1, Name: a, Distance: 1000, Start Date: 2024-01-01T00:00:00Z\n\
         Activity ID: 2, Name: b, Distance: 2500.5, Start Date: 2024-01-02T00:00:00Z\n");
}

#[tokio::test]
async fn test_exit_success_without_activities() {
    let server = start_server(200, json!([])).await;

    let output = run_binary(&server).await;
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_exit_failure_when_unauthorized() {
    let server = start_server(401, json!({"message": "Authorization Error"})).await;

    let output = run_binary(&server).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
