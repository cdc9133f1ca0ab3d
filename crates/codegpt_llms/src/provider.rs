//! Completion service trait

use async_trait::async_trait;

use crate::error::Result;

/// A hosted model that turns one prompt into one response.
///
/// Implementations send a single user-role message and return the first
/// choice's text. They never retry; every failure goes back to the caller.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Short identifier used in logs (e.g. "openai").
    fn provider_id(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}
