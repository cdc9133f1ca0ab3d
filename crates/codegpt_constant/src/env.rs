//! Environment variable names for settings

/// API credential (the `openAIKey` setting)
pub const OPENAI_KEY: &str = "CODEGPT_OPENAI_KEY";
/// Fallback credential variable shared with other OpenAI tooling
pub const OPENAI_KEY_FALLBACK: &str = "OPENAI_API_KEY";
pub const MODEL: &str = "CODEGPT_MODEL";
pub const BASE_URL: &str = "CODEGPT_BASE_URL";
pub const CODE_FENCE: &str = "CODEGPT_CODE_FENCE";
/// `tab` or `insert`
pub const ASK_OUTPUT: &str = "CODEGPT_ASK_OUTPUT";
pub const CONTEXT_RADIUS: &str = "CODEGPT_CONTEXT_RADIUS";
pub const PROGRESS_MS: &str = "CODEGPT_PROGRESS_MS";
/// Log filter, takes precedence over RUST_LOG
pub const LOG: &str = "CODEGPT_LOG";
