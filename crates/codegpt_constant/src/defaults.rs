//! Default setting values

pub const MODEL: &str = "gpt-3.5-turbo";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Lines captured above and below the cursor for contextual snippets
pub const CONTEXT_RADIUS: usize = 3;
/// How long the progress indicator stays up after a completion, in milliseconds
pub const PROGRESS_LINGER_MS: u64 = 1000;

pub const PROGRESS_TITLE: &str = "Loading...";
pub const HELLO_MESSAGE: &str = "Hello World from codegpt!";
pub const CANCELLED_MESSAGE: &str = "You canceled the input.";
/// Shown after network failures, rate limits and 5xx responses
pub const RETRY_HINT: &str = "The completion service may be busy or unreachable. Try again in a moment.";
