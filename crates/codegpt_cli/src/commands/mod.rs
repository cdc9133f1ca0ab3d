//! Command dispatch.

pub mod config;
pub mod run;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Hello => run::hello(),
        Command::Ask {
            prompt,
            document,
            insert,
        } => run::ask(prompt, document, insert).await,
        Command::Code {
            prompt,
            document,
            language,
        } => run::code(prompt, document, language).await,
        Command::Snippet {
            prompt,
            document,
            language,
        } => run::snippet(prompt, document, language).await,
        Command::Config { action } => config::handle(action),
    }
}
