//! Runtime configuration for codegpt

use std::str::FromStr;
use std::time::Duration;

use codegpt_constant::{defaults, env};
use codegpt_core::CODE_FENCE;
use codegpt_llms::providers::openai::OpenAIConfig;

/// Where the `ask` command puts its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AskOutput {
    /// New read-only view
    #[default]
    Tab,
    /// At the cursor of the active document
    Insert,
}

impl AskOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            AskOutput::Tab => "tab",
            AskOutput::Insert => "insert",
        }
    }
}

impl FromStr for AskOutput {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tab" | "new-tab" | "newtab" => Ok(AskOutput::Tab),
            "insert" | "cursor" => Ok(AskOutput::Insert),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for AskOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime configuration. Built once by the host and passed in explicitly.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Completion service credential (the `openAIKey` setting)
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Delimiter used to extract code from `generateCode` responses
    pub code_fence: String,
    pub ask_output: AskOutput,
    /// Lines above and below the cursor sent with contextual snippets
    pub context_radius: usize,
    /// How long progress stays visible after a completion
    pub progress_linger: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            model: defaults::MODEL.to_string(),
            base_url: defaults::OPENAI_BASE_URL.to_string(),
            code_fence: CODE_FENCE.to_string(),
            ask_output: AskOutput::default(),
            context_radius: defaults::CONTEXT_RADIUS,
            progress_linger: Duration::from_millis(defaults::PROGRESS_LINGER_MS),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_code_fence(mut self, fence: impl Into<String>) -> Self {
        self.code_fence = fence.into();
        self
    }

    pub fn with_ask_output(mut self, output: AskOutput) -> Self {
        self.ask_output = output;
        self
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    pub fn with_progress_linger(mut self, linger: Duration) -> Self {
        self.progress_linger = linger;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();

        if let Some(key) = get(env::OPENAI_KEY).or_else(|| get(env::OPENAI_KEY_FALLBACK)) {
            config.api_key = key.trim().to_string();
        }

        if let Some(model) = get(env::MODEL) {
            config.model = model;
        }

        if let Some(url) = get(env::BASE_URL) {
            config.base_url = url;
        }

        if let Some(fence) = get(env::CODE_FENCE) {
            config.code_fence = fence;
        }

        if let Some(output) = get(env::ASK_OUTPUT) {
            match output.parse::<AskOutput>() {
                Ok(output) => config.ask_output = output,
                Err(()) => tracing::warn!(value = %output, "ignoring unknown {}", env::ASK_OUTPUT),
            }
        }

        if let Some(radius) = get(env::CONTEXT_RADIUS) {
            if let Ok(val) = radius.trim().parse::<usize>() {
                config.context_radius = val;
            }
        }

        if let Some(ms) = get(env::PROGRESS_MS) {
            if let Ok(val) = ms.trim().parse::<u64>() {
                config.progress_linger = Duration::from_millis(val);
            }
        }

        config
    }

    /// Provider configuration derived from these settings
    pub fn openai_config(&self) -> OpenAIConfig {
        OpenAIConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Key with everything but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let key = self.api_key.trim();
        let chars: Vec<char> = key.chars().collect();
        match chars.len() {
            0 => "(not set)".to_string(),
            n if n <= 8 => "*".repeat(n),
            n => {
                let head: String = chars[..3].iter().collect();
                let tail: String = chars[n - 4..].iter().collect();
                format!("{head}...{tail}")
            }
        }
    }
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("api_key", &self.masked_api_key())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("code_fence", &self.code_fence)
            .field("ask_output", &self.ask_output)
            .field("context_radius", &self.context_radius)
            .field("progress_linger", &self.progress_linger)
            .finish()
    }
}
