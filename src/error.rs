use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `Pod042`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide how to degrade; internal glue (config loading, CLI
/// dispatch) continues to use `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum PodError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Style pipeline ──────────────────────────────────────────────────
    #[error("style: {0}")]
    Style(#[from] StyleError),

    // ── Session ─────────────────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Style pipeline errors ──────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// A category tag outside the closed taxonomy reached the assembler.
    #[error("invalid category: {0:?}")]
    InvalidCategory(String),

    /// A request record is missing its text or carries a non-string value.
    #[error("malformed input: field `{field}` {reason}")]
    MalformedInput { field: String, reason: String },
}

impl StyleError {
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// ─── Session errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transcript: {0}")]
    Transcript(String),

    #[error("familiarity level {level} is outside [0, 5]")]
    InvalidFamiliarity { level: f64 },

    #[error("turn {index} rejected: {source}")]
    Turn {
        index: usize,
        #[source]
        source: StyleError,
    },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, PodError>;
