//! Conversion between prompts/completions and OpenAI wire types

use super::types::{OpenAIErrorBody, OpenAIMessage, OpenAIRequest, OpenAIResponse};
use crate::error::{Error, Result};

/// One user-role message, nothing else.
pub fn to_openai_request(model: &str, prompt: &str) -> OpenAIRequest {
    OpenAIRequest {
        model: model.to_string(),
        messages: vec![OpenAIMessage {
            role: "user".to_string(),
            content: Some(prompt.to_string()),
        }],
    }
}

/// Content of the first choice. A null content is an empty completion.
pub fn from_openai_response(resp: OpenAIResponse) -> Result<String> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_response("response contained no choices"))?;

    if let Some(reason) = choice.finish_reason.as_deref() {
        tracing::debug!(finish_reason = reason, "completion finished");
    }

    Ok(choice.message.content.unwrap_or_default())
}

/// Turn an error status and body into an [`Error`], preferring the provider's
/// own message when the body is the usual `{"error": {...}}` envelope.
pub fn from_error_status(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<OpenAIErrorBody>(body)
        .map(|b| match b.error.code {
            Some(code) => format!("{} ({code})", b.error.message),
            None => b.error.message,
        })
        .unwrap_or_else(|_| body.trim().to_string());
    Error::from_status(status, message)
}
