//! `codegpt hello|ask|code|snippet`: one command invocation each.

use anyhow::Result;
use codegpt_constant::defaults;
use codegpt_runtime::{AskOutput, Command, CommandError, Outcome, Runtime, RuntimeConfig};

use crate::cli::DocumentArgs;
use crate::document::FileDocument;
use crate::editor::TerminalEditor;
use crate::output;

pub fn hello() -> Result<()> {
    output::info(defaults::HELLO_MESSAGE);
    Ok(())
}

pub async fn ask(prompt: Option<String>, document: DocumentArgs, insert: bool) -> Result<()> {
    let mut config = RuntimeConfig::from_env();
    if insert {
        config = config.with_ask_output(AskOutput::Insert);
    }
    let editor = TerminalEditor::new(prompt, open_document(&document)?);
    invoke(config, Command::Ask, editor).await
}

pub async fn code(
    prompt: Option<String>,
    document: DocumentArgs,
    language: Option<String>,
) -> Result<()> {
    let editor = TerminalEditor::new(prompt, open_document(&document)?).with_language(language);
    invoke(RuntimeConfig::from_env(), Command::GenerateCode, editor).await
}

pub async fn snippet(
    prompt: Option<String>,
    document: DocumentArgs,
    language: Option<String>,
) -> Result<()> {
    let editor = TerminalEditor::new(prompt, open_document(&document)?).with_language(language);
    invoke(
        RuntimeConfig::from_env(),
        Command::GenerateContextualSnippet,
        editor,
    )
    .await
}

fn open_document(args: &DocumentArgs) -> Result<Option<FileDocument>> {
    args.file
        .as_deref()
        .map(|path| FileDocument::open(path, args.line, args.column))
        .transpose()
}

async fn invoke(config: RuntimeConfig, command: Command, mut editor: TerminalEditor) -> Result<()> {
    tracing::debug!(?config, command = %command, "starting invocation");
    let runtime = Runtime::with_openai(config);

    match runtime.run(command, &mut editor).await {
        Ok(Outcome::Message { text }) => {
            output::info(&text);
            Ok(())
        }
        Ok(Outcome::Inserted { result }) => {
            if output::is_json() {
                output::data("inserted", &result);
            } else if let Some(doc) = editor.document() {
                let (line, column) = doc.cursor();
                let lines = result.text.lines().count();
                output::success(&format!(
                    "Inserted {lines} line(s) into {} at {line}:{column}",
                    doc.path().display()
                ));
            }
            Ok(())
        }
        // Already rendered by the editor.
        Ok(Outcome::OpenedTab { .. }) => Ok(()),
        Err(CommandError::CancelledByUser) => {
            output::info(defaults::CANCELLED_MESSAGE);
            Ok(())
        }
        // Logged by the runtime; the response is dropped.
        Err(CommandError::NoActiveEditor) => Ok(()),
        Err(CommandError::Completion(e)) if e.is_retryable() => {
            output::hint(defaults::RETRY_HINT);
            Err(CommandError::Completion(e).into())
        }
        Err(e) => Err(e.into()),
    }
}
