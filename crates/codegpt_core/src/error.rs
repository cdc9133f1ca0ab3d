use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// No text was supplied. Callers treat this as the user cancelling.
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),
}

pub type Result<T> = std::result::Result<T, PromptError>;
