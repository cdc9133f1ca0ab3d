//! codegpt runtime: commands and the host driver.
//!
//! A command is a pure function of a [`PromptRequest`] and a
//! [`CompletionService`](codegpt_llms::CompletionService): see [`execute`].
//! [`Runtime::run`] wraps that with the editor side of an invocation
//! (asking for input, progress, inserting or showing the result) through the
//! [`Editor`] trait, which each host implements.

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod runtime;

#[cfg(test)]
mod tests;

pub use codegpt_core::{ExtractionResult, Mode, PromptRequest};
pub use command::{execute, Command, InputSpec};
pub use config::{AskOutput, RuntimeConfig};
pub use editor::Editor;
pub use error::{CommandError, Result};
pub use runtime::{Outcome, Runtime};
