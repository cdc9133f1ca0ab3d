//! Per-invocation request value.

use serde::{Deserialize, Serialize};

use crate::prompt::{self, SENTINEL};

/// Which template the prompt is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Send the user's text as-is.
    FreeText,
    /// "Generate Code for ..." template; response is fenced.
    CodeGeneration,
    /// Snippet written between two sentinel lines inside the cursor context.
    ContextualSnippet,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::FreeText => "free_text",
            Mode::CodeGeneration => "code_generation",
            Mode::ContextualSnippet => "contextual_snippet",
        }
    }

    /// Delimiter the response should be extracted with, if any.
    ///
    /// `fence` is the configured code fence used by [`Mode::CodeGeneration`].
    pub fn delimiter<'a>(&self, fence: &'a str) -> Option<&'a str> {
        match self {
            Mode::FreeText => None,
            Mode::CodeGeneration => Some(fence),
            Mode::ContextualSnippet => Some(SENTINEL),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the prompt builder needs for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Text typed by the user. `None` when the input box was dismissed.
    pub raw_user_text: Option<String>,
    pub mode: Mode,
    /// Language id of the active document (e.g. "python").
    pub language_hint: Option<String>,
    /// Lines around the cursor, in document order.
    pub context_window: Option<Vec<String>>,
}

impl PromptRequest {
    pub fn new(mode: Mode, raw_user_text: Option<String>) -> Self {
        Self {
            raw_user_text,
            mode,
            language_hint: None,
            context_window: None,
        }
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language_hint = language;
        self
    }

    pub fn with_context(mut self, window: Option<Vec<String>>) -> Self {
        self.context_window = window;
        self
    }

    /// Build the literal prompt text. See [`prompt::build`].
    pub fn build(&self) -> crate::Result<String> {
        prompt::build(
            self.mode,
            self.raw_user_text.as_deref(),
            self.language_hint.as_deref(),
            self.context_window.as_deref(),
        )
    }
}
