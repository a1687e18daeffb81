use clap::Parser;
use httpmock::prelude::*;
use ttp_triage::core::CompletionClient;
use ttp_triage::{CliConfig, OpenAiClient, TriageError};

fn client_for(server: &MockServer) -> OpenAiClient {
    let api_base = server.url("/v1");
    let config = CliConfig::parse_from([
        "ttp-triage",
        "--api-base",
        api_base.as_str(),
        "--request-timeout-secs",
        "5",
    ]);
    OpenAiClient::new("test-key".to_string(), &config).unwrap()
}

#[tokio::test]
async fn test_complete_sends_expected_request_shape() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .header("content-type", "application/json")
            .json_body_partial(
                r#"{"model": "gpt-3.5-turbo", "max_tokens": 2048, "n": 1, "temperature": 0.7}"#,
            )
            .body_contains("you are a helpful system prompt")
            .body_contains("describe the scenario");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "  Phishing, Valid Accounts  "}}
                ]
            }));
    });

    let client = client_for(&server);
    let result = client
        .complete("you are a helpful system prompt", "describe the scenario")
        .await
        .unwrap();

    mock.assert();
    // The response content comes back trimmed.
    assert_eq!(result, "Phishing, Valid Accounts");
}

#[tokio::test]
async fn test_complete_non_success_status_is_typed_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(401)
            .header("Content-Type", "application/json")
            .body(r#"{"error": {"message": "Incorrect API key provided"}}"#);
    });

    let client = client_for(&server);
    let result = client.complete("system", "user").await;

    mock.assert();
    match result {
        Err(TriageError::ApiStatusError { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("expected ApiStatusError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_empty_choices_is_typed_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"choices": []}));
    });

    let client = client_for(&server);
    match client.complete("system", "user").await {
        Err(TriageError::EmptyCompletionError) => {}
        other => panic!("expected EmptyCompletionError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_unreachable_endpoint_is_api_error() {
    // Nothing listens on this port.
    let config = CliConfig::parse_from([
        "ttp-triage",
        "--api-base",
        "http://127.0.0.1:1/v1",
        "--request-timeout-secs",
        "1",
    ]);
    let client = OpenAiClient::new("test-key".to_string(), &config).unwrap();

    match client.complete("system", "user").await {
        Err(TriageError::ApiError(_)) => {}
        other => panic!("expected ApiError, got {:?}", other),
    }
}
