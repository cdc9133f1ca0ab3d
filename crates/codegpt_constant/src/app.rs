//! Application metadata constants

pub const NAME: &str = "codegpt";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Ask a chat model from your editor and drop the answer at the cursor";

/// Directory name for codegpt settings (home or project)
pub const DATA_DIR: &str = ".codegpt";
/// Settings file inside DATA_DIR, dotenv format
pub const ENV_FILE: &str = "env";
