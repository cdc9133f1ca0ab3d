//! codegpt-core: prompt templating and response post-processing.
//!
//! Everything in this crate is pure: a [`PromptRequest`] goes in, a prompt
//! string comes out, and a model response is reduced to an
//! [`ExtractionResult`]. Talking to the completion service and touching the
//! editor live in `codegpt-llms` and `codegpt-runtime`.

pub mod error;
pub mod extract;
pub mod prompt;
pub mod request;

pub use error::{PromptError, Result};
pub use extract::{extract, ExtractionResult, CODE_FENCE};
pub use prompt::{build, SENTINEL};
pub use request::{Mode, PromptRequest};
