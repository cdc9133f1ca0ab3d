//! Fenced-block extraction from model responses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Markdown code fence.
pub const CODE_FENCE: &str = "```";

/// Pattern for [`CODE_FENCE`]; other delimiters are compiled per call.
static CODE_FENCE_BLOCK: Lazy<Option<Regex>> = Lazy::new(|| block_pattern(CODE_FENCE));

/// Outcome of [`extract`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub text: String,
    /// True only when the response split into exactly three segments.
    pub was_extracted: bool,
}

impl ExtractionResult {
    /// Response passed through untouched.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            was_extracted: false,
        }
    }

    fn extracted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            was_extracted: true,
        }
    }
}

/// Reduce `text` to the block enclosed by `delimiter`.
///
/// Only a response with exactly two occurrences of `delimiter` is reduced; any
/// other response, including one with several fenced blocks, is returned
/// verbatim. When the split matches but the block pattern does not (no newline
/// after the opening delimiter), the result is an empty string.
pub fn extract(text: &str, delimiter: &str) -> ExtractionResult {
    if delimiter.is_empty() || text.split(delimiter).count() != 3 {
        return ExtractionResult::unchanged(text);
    }

    let inner = if delimiter == CODE_FENCE {
        capture_block((*CODE_FENCE_BLOCK).as_ref(), text)
    } else {
        capture_block(block_pattern(delimiter).as_ref(), text)
    };

    ExtractionResult::extracted(inner.map(str::trim).unwrap_or_default())
}

/// Opening delimiter with an optional tag up to end of line, the interior,
/// then the closing delimiter.
fn block_pattern(delimiter: &str) -> Option<Regex> {
    let escaped = regex::escape(delimiter);
    Regex::new(&format!(r"(?:{escaped}.*\n)([\s\S]*)(?:{escaped})")).ok()
}

fn capture_block<'t>(pattern: Option<&Regex>, text: &'t str) -> Option<&'t str> {
    pattern?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
