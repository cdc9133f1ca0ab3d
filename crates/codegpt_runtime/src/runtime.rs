//! Host driver: runs one command invocation against an [`Editor`].

use std::sync::Arc;

use codegpt_constant::defaults;
use codegpt_core::{ExtractionResult, PromptRequest};
use codegpt_llms::{CompletionService, OpenAIProvider};
use codegpt_observability::{command_span, record_error};
use serde::Serialize;
use tracing::Instrument;

use crate::command::{complete_and_extract, Command};
use crate::config::{AskOutput, RuntimeConfig};
use crate::editor::Editor;
use crate::error::{CommandError, Result};

/// Language hint for answers shown in a tab.
const ANSWER_LANGUAGE: &str = "markdown";

/// What an invocation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Informational message, no model call
    Message { text: String },
    /// Result inserted at the cursor
    Inserted { result: ExtractionResult },
    /// Result shown in a read-only view
    OpenedTab {
        result: ExtractionResult,
        language: Option<String>,
    },
}

/// Immutable settings plus the completion service. Invocations share nothing else.
#[derive(Clone)]
pub struct Runtime {
    config: RuntimeConfig,
    service: Arc<dyn CompletionService>,
}

impl Runtime {
    pub fn new(config: RuntimeConfig, service: Arc<dyn CompletionService>) -> Self {
        Self { config, service }
    }

    /// Runtime backed by the OpenAI provider described by `config`.
    pub fn with_openai(config: RuntimeConfig) -> Self {
        let provider = OpenAIProvider::new(config.openai_config());
        Self::new(config, Arc::new(provider))
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Run one command: collect input, call the model, apply the result.
    pub async fn run(&self, command: Command, editor: &mut dyn Editor) -> Result<Outcome> {
        let invocation_id = uuid::Uuid::new_v4().to_string();
        let span = command_span!(command.id(), invocation_id.as_str());

        async {
            let outcome = self.dispatch(command, editor).await;
            let current = tracing::Span::current();
            match &outcome {
                Ok(_) => {
                    current.record("outcome", "ok");
                }
                Err(e) => {
                    current.record("outcome", e.kind());
                    record_error(e);
                }
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn dispatch(&self, command: Command, editor: &mut dyn Editor) -> Result<Outcome> {
        let (Some(mode), Some(input)) = (command.mode(), command.input()) else {
            return Ok(Outcome::Message {
                text: defaults::HELLO_MESSAGE.to_string(),
            });
        };
        tracing::Span::current().record("mode", mode.as_str());

        let text = editor.prompt_user_for_text(input.label, input.placeholder);
        let mut request = PromptRequest::new(mode, text);

        match command {
            Command::GenerateCode => {
                request = request.with_language(editor.current_language_id());
            }
            Command::GenerateContextualSnippet => {
                // Cancellation is reported before a missing editor.
                request.build()?;
                let window = editor
                    .current_surrounding_lines(self.config.context_radius)
                    .ok_or_else(|| {
                        tracing::warn!(command = %command, "no active editor to take context from");
                        CommandError::NoActiveEditor
                    })?;
                request = request
                    .with_language(editor.current_language_id())
                    .with_context(Some(window));
            }
            _ => {}
        }

        let prompt = request.build()?;

        editor.begin_progress(defaults::PROGRESS_TITLE);
        let result = complete_and_extract(
            &prompt,
            mode,
            self.service.as_ref(),
            &self.config.code_fence,
        )
        .await;
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                editor.end_progress();
                return Err(e);
            }
        };

        let applied = self.apply(command, editor, result);
        if !self.config.progress_linger.is_zero() {
            tokio::time::sleep(self.config.progress_linger).await;
        }
        editor.end_progress();
        applied
    }

    fn apply(
        &self,
        command: Command,
        editor: &mut dyn Editor,
        result: ExtractionResult,
    ) -> Result<Outcome> {
        if command == Command::Ask && self.config.ask_output == AskOutput::Tab {
            editor.open_read_only_tab(&result.text, Some(ANSWER_LANGUAGE))?;
            return Ok(Outcome::OpenedTab {
                result,
                language: Some(ANSWER_LANGUAGE.to_string()),
            });
        }

        if let Err(e) = editor.insert_at_cursor(&result.text) {
            if matches!(e, CommandError::NoActiveEditor) {
                tracing::warn!(command = %command, "no active editor, discarding response");
            }
            return Err(e);
        }
        Ok(Outcome::Inserted { result })
    }
}
