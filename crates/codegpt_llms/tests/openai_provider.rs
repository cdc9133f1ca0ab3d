//! OpenAI provider against a local mock server.
//!
//! Run with: cargo test -p codegpt-llms --test openai_provider

use codegpt_llms::providers::openai::OpenAIConfig;
use codegpt_llms::{CompletionService, Error, OpenAIProvider};
use mockito::{Matcher, Server};
use serde_json::json;

fn provider_for(server: &Server) -> OpenAIProvider {
    OpenAIProvider::new(
        OpenAIConfig::new("test-key")
            .with_base_url(server.url())
            .with_model("gpt-3.5-turbo"),
    )
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1,
        "model": "gpt-3.5-turbo-0613",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2 }
    })
    .to_string()
}

#[tokio::test]
async fn sends_single_user_message_and_returns_first_choice() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{ "role": "user", "content": "Generate Code for bubble sort in python. No explanation needed" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("```python\ndef sort(xs): ...\n```"))
        .create_async()
        .await;

    let text = provider_for(&server)
        .complete("Generate Code for bubble sort in python. No explanation needed")
        .await?;

    mock.assert_async().await;
    assert_eq!(text, "```python\ndef sort(xs): ...\n```");
    Ok(())
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#)
        .create_async()
        .await;

    let err = provider_for(&server).complete("hi").await.unwrap_err();
    assert!(matches!(err, Error::Auth(ref m) if m.contains("Incorrect API key")), "got {err:?}");
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#)
        .expect(1)
        .create_async()
        .await;

    let err = provider_for(&server).complete("hi").await.unwrap_err();

    // One call only: no retry.
    mock.assert_async().await;
    assert!(matches!(err, Error::RateLimit(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = provider_for(&server).complete("hi").await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = provider_for(&server).complete("hi").await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_key_never_reaches_the_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let provider = OpenAIProvider::new(OpenAIConfig::new("").with_base_url(server.url()));
    let err = provider.complete("hi").await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::Auth(_)));
}

#[tokio::test]
async fn organization_header_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("openai-organization", "org-123")
        .with_status(200)
        .with_body(completion_body("ok"))
        .create_async()
        .await;

    let provider = OpenAIProvider::new(
        OpenAIConfig::new("test-key")
            .with_base_url(server.url())
            .with_organization_id("org-123"),
    );
    assert_eq!(provider.complete("hi").await.unwrap(), "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Port 9 (discard) is closed on test machines.
    let provider = OpenAIProvider::new(
        OpenAIConfig::new("test-key").with_base_url("http://127.0.0.1:9/v1"),
    );
    let err = provider.complete("hi").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)), "got {err:?}");
}
