//! Error types for conditional evaluation.

/// Misuse of the evaluation API.
///
/// These are never mapped to a disabled outcome: they surface to the caller
/// so a broken configuration is distinguishable from a false condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// The conditional carries no script lines.
    #[error("conditional script lines must not be empty")]
    EmptyScript,

    /// `bindContext` is set but the caller supplied no execution context.
    #[error("execution context must be supplied when bindContext is enabled")]
    MissingContext,

    /// Engine lookup was attempted with an empty identifier.
    #[error("script engine identifier must not be empty")]
    EmptyEngineIdentifier,

    /// No registered engine matches by name, extension, or MIME type.
    #[error("script engine not found: {identifier}")]
    EngineNotFound { identifier: String },
}

impl ConditionError {
    /// Stable snake_case tag, used in JSON output and fixtures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyScript => "empty_script",
            Self::MissingContext => "missing_context",
            Self::EmptyEngineIdentifier => "empty_engine_identifier",
            Self::EngineNotFound { .. } => "engine_not_found",
        }
    }
}

/// A syntax or runtime failure raised by a script engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ScriptError {
    pub message: String,
}

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
