//! Terminal implementation of the runtime's `Editor`.

use std::io::{BufRead, IsTerminal};

use codegpt_runtime::{CommandError, Editor};
use console::{style, Term};
use indicatif::ProgressBar;

use crate::document::FileDocument;
use crate::output;

pub struct TerminalEditor {
    /// Text given on the command line; skips the interactive prompt.
    preset_input: Option<String>,
    document: Option<FileDocument>,
    language_override: Option<String>,
    spinner: Option<ProgressBar>,
}

impl TerminalEditor {
    pub fn new(preset_input: Option<String>, document: Option<FileDocument>) -> Self {
        Self {
            preset_input,
            document,
            language_override: None,
            spinner: None,
        }
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language_override = language;
        self
    }

    pub fn document(&self) -> Option<&FileDocument> {
        self.document.as_ref()
    }
}

/// Read one line. EOF is a dismissed prompt; an empty line stays empty.
fn read_line(label: &str, placeholder: &str) -> Option<String> {
    if std::io::stdin().is_terminal() {
        let term = Term::stderr();
        let _ = term.write_line(&format!(
            "{} {}",
            style(label).bold(),
            style(format!("({placeholder})")).dim()
        ));
        return term.read_line().ok();
    }

    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let trimmed = line.strip_suffix('\n').unwrap_or(&line);
            Some(trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string())
        }
    }
}

impl Editor for TerminalEditor {
    fn prompt_user_for_text(&mut self, label: &str, placeholder: &str) -> Option<String> {
        match self.preset_input.take() {
            Some(text) => Some(text),
            None => read_line(label, placeholder),
        }
    }

    fn current_language_id(&self) -> Option<String> {
        self.language_override
            .clone()
            .or_else(|| self.document.as_ref().map(FileDocument::language_id))
    }

    fn current_surrounding_lines(&self, radius: usize) -> Option<Vec<String>> {
        self.document.as_ref().map(|doc| doc.surrounding_lines(radius))
    }

    fn insert_at_cursor(&mut self, text: &str) -> codegpt_runtime::Result<()> {
        let doc = self.document.as_mut().ok_or(CommandError::NoActiveEditor)?;
        doc.insert_at_cursor(text)
            .map_err(|e| CommandError::Editor(format!("{e:#}")))
    }

    fn open_read_only_tab(
        &mut self,
        text: &str,
        language_hint: Option<&str>,
    ) -> codegpt_runtime::Result<()> {
        // Keep the spinner from drawing over the response.
        if let Some(spinner) = &self.spinner {
            spinner.suspend(|| output::document(text, language_hint));
        } else {
            output::document(text, language_hint);
        }
        Ok(())
    }

    fn begin_progress(&mut self, title: &str) {
        self.spinner = Some(output::spinner(title));
    }

    fn end_progress(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
