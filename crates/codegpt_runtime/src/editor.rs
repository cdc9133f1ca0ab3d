//! Editor capability implemented by each host.

use crate::error::Result;

/// What a command needs from the editor it runs in.
///
/// Lookups return `None` when there is no active document.
pub trait Editor: Send {
    /// Ask the user for a line of text. `None` means the box was dismissed.
    fn prompt_user_for_text(&mut self, label: &str, placeholder: &str) -> Option<String>;

    /// Language id of the active document (e.g. "python").
    fn current_language_id(&self) -> Option<String>;

    /// Up to `radius` lines above and below the cursor plus the cursor line.
    fn current_surrounding_lines(&self, radius: usize) -> Option<Vec<String>>;

    /// Insert at the cursor of the active document.
    /// Fails with `CommandError::NoActiveEditor` when there is none.
    fn insert_at_cursor(&mut self, text: &str) -> Result<()>;

    /// Show `text` in a new read-only view. Needs no active document.
    fn open_read_only_tab(&mut self, text: &str, language_hint: Option<&str>) -> Result<()>;

    fn begin_progress(&mut self, _title: &str) {}

    fn end_progress(&mut self) {}
}
