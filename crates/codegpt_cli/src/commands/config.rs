//! `codegpt config` subcommands.

use anyhow::Result;
use codegpt_constant::env;
use codegpt_runtime::RuntimeConfig;
use comfy_table::Cell;
use serde_json::json;

use crate::cli::ConfigAction;
use crate::output;
use crate::settings;

pub fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Path => path(),
    }
}

fn show() -> Result<()> {
    let config = RuntimeConfig::from_env();
    let rows: Vec<(&str, &str, String)> = vec![
        ("openAIKey", env::OPENAI_KEY, config.masked_api_key()),
        ("model", env::MODEL, config.model.clone()),
        ("baseUrl", env::BASE_URL, config.base_url.clone()),
        ("codeFence", env::CODE_FENCE, config.code_fence.clone()),
        ("askOutput", env::ASK_OUTPUT, config.ask_output.to_string()),
        ("contextRadius", env::CONTEXT_RADIUS, config.context_radius.to_string()),
        (
            "progressMs",
            env::PROGRESS_MS,
            config.progress_linger.as_millis().to_string(),
        ),
    ];

    output::header("Settings");
    let mut table = output::table();
    output::table_header(&mut table, &["Setting", "Variable", "Value"]);
    for (name, var, value) in &rows {
        table.add_row(vec![
            Cell::new(name).fg(comfy_table::Color::Green),
            Cell::new(var),
            Cell::new(value),
        ]);
    }
    let items: Vec<_> = rows
        .iter()
        .map(|(name, var, value)| json!({ "setting": name, "variable": var, "value": value }))
        .collect();
    output::table_print(&table, &json!({ "items": items }));

    if !config.has_api_key() {
        output::dim(&format!(
            "No API key set. Add {}=... to ~/.codegpt/env or export it.",
            env::OPENAI_KEY
        ));
    }
    Ok(())
}

fn path() -> Result<()> {
    output::header("Settings files (highest priority first)");
    let files = settings::env_files();
    if output::is_json() {
        let items: Vec<_> = files
            .iter()
            .map(|p| json!({ "path": p.display().to_string(), "exists": p.exists() }))
            .collect();
        output::data("files", &items);
        return Ok(());
    }
    for file in files {
        let marker = if file.exists() { "found" } else { "missing" };
        output::dim(&format!("  {} ({marker})", file.display()));
    }
    output::dim("Variables already set in the environment take precedence.");
    Ok(())
}
