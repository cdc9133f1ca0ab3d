//! File-backed document with a cursor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A text file opened at a cursor position.
#[derive(Debug)]
pub struct FileDocument {
    path: PathBuf,
    content: String,
    /// 0-based line index
    line: usize,
    /// 0-based column, in chars
    column: usize,
}

impl FileDocument {
    /// Open `path`. `line` and `column` are 1-based; the cursor defaults to the
    /// end of the file and is clamped to existing text.
    pub fn open(path: &Path, line: Option<usize>, column: Option<usize>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut doc = Self {
            path: path.to_path_buf(),
            content,
            line: 0,
            column: 0,
        };
        match line {
            Some(line) => doc.set_cursor(line.saturating_sub(1), column.unwrap_or(1).saturating_sub(1)),
            None => doc.cursor_to_end(),
        }
        Ok(doc)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// 1-based cursor position
    pub fn cursor(&self) -> (usize, usize) {
        (self.line + 1, self.column + 1)
    }

    /// Language id derived from the file extension.
    pub fn language_id(&self) -> String {
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        language_for_extension(&ext).to_string()
    }

    /// The cursor line and up to `radius` lines on each side, in order.
    pub fn surrounding_lines(&self, radius: usize) -> Vec<String> {
        let lines: Vec<&str> = self.content.lines().collect();
        if lines.is_empty() {
            return vec![String::new()];
        }
        let line = self.line.min(lines.len() - 1);
        let start = line.saturating_sub(radius);
        let end = (line + radius + 1).min(lines.len());
        lines[start..end].iter().map(|l| l.to_string()).collect()
    }

    /// Insert `text` at the cursor and write the file back.
    pub fn insert_at_cursor(&mut self, text: &str) -> Result<()> {
        let offset = self.cursor_offset();
        self.content.insert_str(offset, text);
        std::fs::write(&self.path, &self.content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    fn set_cursor(&mut self, line: usize, column: usize) {
        self.line = line.min(self.line_count() - 1);
        let width = self.line_text(self.line).chars().count();
        self.column = column.min(width);
    }

    fn cursor_to_end(&mut self) {
        self.line = self.line_count() - 1;
        self.column = self.line_text(self.line).chars().count();
    }

    fn line_text(&self, line: usize) -> &str {
        let text = self.content.split('\n').nth(line).unwrap_or("");
        text.strip_suffix('\r').unwrap_or(text)
    }

    /// Byte offset of the cursor in `content`.
    fn cursor_offset(&self) -> usize {
        let line_start: usize = self
            .content
            .split_inclusive('\n')
            .take(self.line)
            .map(str::len)
            .sum();
        let column_bytes: usize = self
            .line_text(self.line)
            .chars()
            .take(self.column)
            .map(char::len_utf8)
            .sum();
        line_start + column_bytes
    }
}

/// Editor-style language ids for common extensions.
pub fn language_for_extension(ext: &str) -> &'static str {
    match ext {
        "rs" => "rust",
        "py" | "pyw" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "go" => "go",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "scala" => "scala",
        "dart" => "dart",
        "lua" => "lua",
        "r" => "r",
        "sh" | "bash" | "zsh" => "shellscript",
        "ps1" => "powershell",
        "sql" => "sql",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "xml" => "xml",
        "md" | "markdown" => "markdown",
        _ => "plaintext",
    }
}
