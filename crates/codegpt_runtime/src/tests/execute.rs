use codegpt_core::{ExtractionResult, Mode, PromptRequest, SENTINEL};
use codegpt_llms::Error as LlmError;

use super::mocks::MockService;
use crate::command::execute;
use crate::error::CommandError;

#[tokio::test]
async fn test_free_text_passes_response_through() {
    let service = MockService::replying("```rust\nfn main() {}\n```");
    let request = PromptRequest::new(Mode::FreeText, Some("show me main".into()));

    let result = execute(&request, &service, "```").await.unwrap();

    assert_eq!(result, ExtractionResult::unchanged("```rust\nfn main() {}\n```"));
    assert_eq!(service.sent(), vec!["show me main"]);
}

#[tokio::test]
async fn test_code_generation_extracts_fence() {
    let service = MockService::replying("Sure!\n```python\nprint(1)\n```\nEnjoy.");
    let request = PromptRequest::new(Mode::CodeGeneration, Some("print one".into()))
        .with_language(Some("python".into()));

    let result = execute(&request, &service, "```").await.unwrap();

    assert_eq!(result.text, "print(1)");
    assert!(result.was_extracted);
    assert_eq!(
        service.sent(),
        vec!["Generate Code for print one in python. No explanation needed"]
    );
}

#[tokio::test]
async fn test_code_generation_uses_configured_fence() {
    let service = MockService::replying("~~~js\nlet x = 1;\n~~~");
    let request = PromptRequest::new(Mode::CodeGeneration, Some("x".into()));

    let result = execute(&request, &service, "~~~").await.unwrap();
    assert_eq!(result.text, "let x = 1;");
}

#[tokio::test]
async fn test_contextual_snippet_extracts_between_sentinels() {
    let reply = format!("```js\nfunction f(s) {{\n{SENTINEL}\n  return [...s].reverse().join('');\n{SENTINEL}\n}}\n```");
    let service = MockService::replying(&reply);
    let request = PromptRequest::new(Mode::ContextualSnippet, Some("reverse a string".into()))
        .with_language(Some("javascript".into()))
        .with_context(Some(vec!["function f(s) {".into(), "}".into()]));

    let result = execute(&request, &service, "```").await.unwrap();

    assert_eq!(result.text, "return [...s].reverse().join('');");
    let sent = service.sent();
    assert!(sent[0].starts_with("create a snippet in javascript to reverse a string."));
}

#[tokio::test]
async fn test_empty_text_sends_nothing() {
    let service = MockService::replying("unused");
    for text in [None, Some(String::new())] {
        let request = PromptRequest::new(Mode::CodeGeneration, text);
        let err = execute(&request, &service, "```").await.unwrap_err();
        assert!(matches!(err, CommandError::CancelledByUser));
    }
    assert!(service.sent().is_empty());
}

#[tokio::test]
async fn test_completion_errors_propagate() {
    let cases: [(fn() -> LlmError, &str); 3] = [
        (|| LlmError::Network("connection reset".into()), "network"),
        (|| LlmError::Auth("bad key".into()), "auth"),
        (|| LlmError::RateLimit("slow down".into()), "rate_limit"),
    ];
    for (make, kind) in cases {
        let service = MockService::failing(make);
        let request = PromptRequest::new(Mode::FreeText, Some("hi".into()));
        let err = execute(&request, &service, "```").await.unwrap_err();
        assert_eq!(err.kind(), kind);
        assert_eq!(service.sent().len(), 1, "no retry for {kind}");
    }
}
