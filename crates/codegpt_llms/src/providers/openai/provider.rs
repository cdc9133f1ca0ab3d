//! OpenAI provider implementation

use async_trait::async_trait;
use reqwest::Client;

use super::convert::{from_error_status, from_openai_response, to_openai_request};
use super::types::{OpenAIConfig, OpenAIResponse};
use crate::error::{Error, Result};
use crate::provider::CompletionService;

/// OpenAI Chat Completions provider
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider. The key is not checked here; a missing or
    /// rejected key shows up as [`Error::Auth`] from [`CompletionService::complete`].
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionService for OpenAIProvider {
    fn provider_id(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        if !self.config.has_api_key() {
            return Err(Error::Auth(
                "no OpenAI API key configured (set CODEGPT_OPENAI_KEY)".to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.config.base_url);
        let body = to_openai_request(&self.config.model, prompt);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            "sending chat completion"
        );

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body);
        if let Some(ref org_id) = self.config.organization_id {
            request = request.header("OpenAI-Organization", org_id);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "chat completion rejected");
            return Err(from_error_status(status.as_u16(), &error_text));
        }

        let text = response.text().await?;
        let openai_resp: OpenAIResponse = serde_json::from_str(&text)?;
        if let Some(model) = openai_resp.model.as_deref() {
            tracing::debug!(served_by = model, "chat completion received");
        }
        from_openai_response(openai_resp)
    }
}
