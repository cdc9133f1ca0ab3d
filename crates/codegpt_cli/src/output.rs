//! Terminal output helpers. Styled text for humans, one JSON object per line with `-o json`.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data
//! - `indicatif` for the progress spinner

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn to_json_line(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        serde_json::json!({ "level": level, "message": message }).to_string()
    })
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", to_json_line(level, message, data));
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn info(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{} {}", style("i").blue(), text);
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", to_json_line("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

/// Follow-up advice for a failure, on stderr next to the error.
pub fn hint(text: &str) {
    if is_json() {
        eprintln!("{}", to_json_line("hint", text, None));
    } else {
        eprintln!("{} {}", style("→").yellow(), style(text).dim());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Emit an arbitrary serializable value as structured output.
pub fn data<T: Serialize>(label: &str, value: &T) {
    let value = serde_json::to_value(value).unwrap_or(JsonValue::Null);
    if is_json() {
        emit_json("data", label, Some(&value));
    } else {
        let formatted = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        println!("{formatted}");
    }
}

/// Show a block of generated text, the terminal's stand-in for a read-only tab.
pub fn document(text: &str, language: Option<&str>) {
    if is_json() {
        let data = serde_json::json!({ "text": text, "language": language });
        emit_json("document", "", Some(&data));
        return;
    }
    let title = match language {
        Some(lang) => format!("── response ({lang}) "),
        None => "── response ".to_string(),
    };
    println!("{}", style(format!("{title:─<48}")).dim());
    println!("{text}");
    println!("{}", style("─".repeat(48)).dim());
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table for listing items.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Add a bold header row to the table.
pub fn table_header(table: &mut Table, columns: &[&str]) {
    let cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            Cell::new(c)
                .fg(Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold)
        })
        .collect();
    table.set_header(cells);
}

/// Print a table (JSON mode emits `rows` instead).
pub fn table_print(table: &Table, rows: &JsonValue) {
    if is_json() {
        emit_json("list", "", Some(rows));
    } else {
        println!("{table}");
    }
}

// ── Spinners ───────────────────────────────────────────────────────

/// Spinner on stderr; hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
