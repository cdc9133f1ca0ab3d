//! Span helpers

/// Span for one command invocation.
///
/// ```rust
/// use codegpt_observability::command_span;
///
/// let span = command_span!("generateCode", "6f1c0b8e");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! command_span {
    ($command:expr, $invocation_id:expr) => {
        tracing::info_span!(
            "command",
            command = $command,
            invocation.id = $invocation_id,
            mode = tracing::field::Empty,
            outcome = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Span around a single completion request.
///
/// ```rust
/// use codegpt_observability::completion_span;
///
/// let span = completion_span!("openai", "gpt-3.5-turbo");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! completion_span {
    ($provider:expr, $model:expr) => {
        tracing::info_span!(
            "completion",
            provider = $provider,
            model = $model,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and log it.
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string().as_str());
    tracing::debug!(error = %error, "operation failed");
}

/// Record elapsed milliseconds under `key` on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
