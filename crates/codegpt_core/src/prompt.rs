//! Prompt templates for each [`Mode`].

use crate::error::{PromptError, Result};
use crate::request::Mode;

/// Splice marker the model is asked to write generated code between.
pub const SENTINEL: &str = "//-------generatedgptcode-------";

/// Build the prompt sent to the completion service.
///
/// Fails with [`PromptError::InvalidRequest`] when `raw_user_text` is missing
/// or empty; nothing should be sent in that case.
pub fn build(
    mode: Mode,
    raw_user_text: Option<&str>,
    language_hint: Option<&str>,
    context_window: Option<&[String]>,
) -> Result<String> {
    let text = match raw_user_text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(PromptError::InvalidRequest("no prompt text supplied")),
    };
    let language = language_hint.filter(|lang| !lang.is_empty());

    let prompt = match mode {
        Mode::FreeText => text.to_string(),
        Mode::CodeGeneration => code_generation(text, language),
        Mode::ContextualSnippet => contextual_snippet(text, language, context_window.unwrap_or(&[])),
    };
    Ok(prompt)
}

fn code_generation(text: &str, language: Option<&str>) -> String {
    match language {
        Some(lang) => format!("Generate Code for {text} in {lang}. No explanation needed"),
        None => format!("Generate Code for {text}. No explanation needed"),
    }
}

fn contextual_snippet(text: &str, language: Option<&str>, window: &[String]) -> String {
    let block = splice_sentinel(window).join("\n");
    match language {
        Some(lang) => format!(
            "create a snippet in {lang} to {text}. Write the code inside {SENTINEL}.\n```{lang}\n{block}\n```"
        ),
        None => format!(
            "create a snippet to {text}. Write the code inside {SENTINEL}.\n```\n{block}\n```"
        ),
    }
}

/// Insert two adjacent sentinel lines at the middle of the window.
fn splice_sentinel(window: &[String]) -> Vec<&str> {
    let mid = window.len() / 2;
    let mut lines: Vec<&str> = Vec::with_capacity(window.len() + 2);
    lines.extend(window[..mid].iter().map(String::as_str));
    lines.push(SENTINEL);
    lines.push(SENTINEL);
    lines.extend(window[mid..].iter().map(String::as_str));
    lines
}
