//! codegpt_llms: chat-completion client.
//!
//! The runtime only needs one capability from a model: turn a prompt into
//! text. [`CompletionService`] is that seam; [`OpenAIProvider`] implements it
//! against the Chat Completions API.
//!
//! ```rust,no_run
//! use codegpt_llms::{CompletionService, OpenAIProvider};
//! use codegpt_llms::providers::openai::OpenAIConfig;
//!
//! # async fn run() -> codegpt_llms::Result<()> {
//! let provider = OpenAIProvider::new(OpenAIConfig::new("sk-...").with_model("gpt-3.5-turbo"));
//! let text = provider.complete("Generate Code for bubble sort in rust").await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;
pub mod providers;


pub use error::{Error, Result};
pub use provider::CompletionService;
pub use providers::OpenAIProvider;
