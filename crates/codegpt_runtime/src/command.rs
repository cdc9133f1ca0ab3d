//! Commands exposed to the host and the pure request → result step.

use std::str::FromStr;
use std::time::Instant;

use codegpt_core::{extract, ExtractionResult, Mode, PromptRequest};
use codegpt_llms::CompletionService;
use codegpt_observability::{completion_span, record_duration, record_error};
use tracing::Instrument;

use crate::error::Result;

/// Commands a host registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Static diagnostic, no model call
    HelloWorld,
    /// Free-text question
    Ask,
    /// "Generate Code for ..." in the active document's language
    GenerateCode,
    /// Snippet written into the lines around the cursor
    GenerateContextualSnippet,
}

/// Input box shown before a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::HelloWorld,
        Command::Ask,
        Command::GenerateCode,
        Command::GenerateContextualSnippet,
    ];

    /// Identifier the host registers the command under
    pub fn id(&self) -> &'static str {
        match self {
            Command::HelloWorld => "helloWorld",
            Command::Ask => "ask",
            Command::GenerateCode => "generateCode",
            Command::GenerateContextualSnippet => "generateContextualSnippet",
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Command::HelloWorld => None,
            Command::Ask => Some(Mode::FreeText),
            Command::GenerateCode => Some(Mode::CodeGeneration),
            Command::GenerateContextualSnippet => Some(Mode::ContextualSnippet),
        }
    }

    pub fn input(&self) -> Option<InputSpec> {
        match self {
            Command::HelloWorld => None,
            Command::Ask => Some(InputSpec {
                label: "Ask Anything",
                placeholder: "Enter your question here...",
            }),
            Command::GenerateCode => Some(InputSpec {
                label: "Generate Code for ...",
                placeholder: "bubble sort",
            }),
            Command::GenerateContextualSnippet => Some(InputSpec {
                label: "Create a snippet to ...",
                placeholder: "reverse a string",
            }),
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown command '{s}'"))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Build the prompt, make one completion call and extract per the mode.
///
/// Missing or empty text fails with `CommandError::CancelledByUser` before
/// anything is sent. Completion errors are returned as-is; nothing retries.
pub async fn execute(
    request: &PromptRequest,
    service: &dyn CompletionService,
    fence: &str,
) -> Result<ExtractionResult> {
    let prompt = request.build()?;
    complete_and_extract(&prompt, request.mode, service, fence).await
}

pub(crate) async fn complete_and_extract(
    prompt: &str,
    mode: Mode,
    service: &dyn CompletionService,
    fence: &str,
) -> Result<ExtractionResult> {
    let span = completion_span!(service.provider_id(), service.model());
    let response = async {
        let started = Instant::now();
        let response = service.complete(prompt).await;
        record_duration("duration_ms", started.elapsed());
        if let Err(ref e) = response {
            record_error(e);
        }
        response
    }
    .instrument(span)
    .await?;

    let result = match mode.delimiter(fence) {
        Some(delimiter) => extract(&response, delimiter),
        None => ExtractionResult::unchanged(response),
    };
    tracing::debug!(
        mode = %mode,
        extracted = result.was_extracted,
        chars = result.text.chars().count(),
        "completion processed"
    );
    Ok(result)
}
