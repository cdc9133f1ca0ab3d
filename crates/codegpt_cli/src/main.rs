//! CLI entry point for codegpt.

mod cli;
mod commands;
mod document;
mod editor;
mod output;
mod settings;

use clap::Parser;
use codegpt_constant::app;
use codegpt_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Logs go to stderr at `warn` unless `-v` or CODEGPT_LOG/RUST_LOG say otherwise.
fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env()
        .with_version(app::VERSION)
        .with_default_level("warn");
    if verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = codegpt_observability::init(config) {
        output::error(&format!("logging disabled: {e}"));
    }
}

#[tokio::main]
async fn main() {
    let loaded = settings::load();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);
    tracing::debug!(files = ?loaded, "settings loaded");

    let result = commands::handle(cli).await;
    codegpt_observability::shutdown();

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
