//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use codegpt_constant::app;

#[derive(Parser)]
#[command(
    name = app::NAME,
    about = app::DESCRIPTION,
    version = app::VERSION,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

/// The document the command acts on. Without `--file` there is no active editor.
#[derive(Args, Clone, Debug, Default)]
pub struct DocumentArgs {
    /// File to treat as the active document
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Cursor line, 1-based (default: end of file)
    #[arg(short, long, requires = "file")]
    pub line: Option<usize>,
    /// Cursor column, 1-based (default: 1)
    #[arg(short, long, requires = "file")]
    pub column: Option<usize>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a diagnostic message without calling the model
    Hello,
    /// Ask anything; the answer is shown, or inserted with --insert
    Ask {
        /// Question text (prompted for when omitted)
        #[arg(short, long)]
        prompt: Option<String>,
        #[command(flatten)]
        document: DocumentArgs,
        /// Insert the answer at the cursor instead of showing it
        #[arg(long, requires = "file")]
        insert: bool,
    },
    /// Generate code in the document's language and insert it at the cursor
    Code {
        /// What to generate, e.g. "bubble sort" (prompted for when omitted)
        #[arg(short, long)]
        prompt: Option<String>,
        #[command(flatten)]
        document: DocumentArgs,
        /// Language id, overriding the one derived from the file extension
        #[arg(long)]
        language: Option<String>,
    },
    /// Write a snippet into the lines around the cursor
    Snippet {
        /// What the snippet should do (prompted for when omitted)
        #[arg(short, long)]
        prompt: Option<String>,
        #[command(flatten)]
        document: DocumentArgs,
        /// Language id, overriding the one derived from the file extension
        #[arg(long)]
        language: Option<String>,
    },
    /// Inspect codegpt settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show resolved settings (API key masked)
    Show,
    /// List the env files settings are read from
    Path,
}
