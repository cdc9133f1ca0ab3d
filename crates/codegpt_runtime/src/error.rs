//! Command error types

use codegpt_core::PromptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Input box dismissed or left empty. Nothing was sent.
    #[error("input cancelled")]
    CancelledByUser,

    /// No document to apply the result to.
    #[error("no active editor")]
    NoActiveEditor,

    #[error(transparent)]
    Completion(#[from] codegpt_llms::Error),

    /// Host failed to apply or show the result.
    #[error("editor error: {0}")]
    Editor(String),
}

// An unbuildable prompt only ever means the user gave no text.
impl From<PromptError> for CommandError {
    fn from(_: PromptError) -> Self {
        CommandError::CancelledByUser
    }
}

impl CommandError {
    /// Short name recorded on the command span.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::CancelledByUser => "cancelled",
            CommandError::NoActiveEditor => "no_active_editor",
            CommandError::Completion(codegpt_llms::Error::Network(_)) => "network",
            CommandError::Completion(codegpt_llms::Error::Auth(_)) => "auth",
            CommandError::Completion(codegpt_llms::Error::RateLimit(_)) => "rate_limit",
            CommandError::Completion(_) => "completion",
            CommandError::Editor(_) => "editor",
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
