//! The terminal decision of one conditional evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enabled/disabled decision plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Enabled { reason: String },
    Disabled { reason: String },
}

impl EvaluationOutcome {
    pub fn enabled(reason: impl Into<String>) -> Self {
        Self::Enabled {
            reason: reason.into(),
        }
    }

    pub fn disabled(reason: impl Into<String>) -> Self {
        Self::Disabled {
            reason: reason.into(),
        }
    }

    /// Build from a parsed boolean.
    pub fn from_decision(enabled: bool, reason: impl Into<String>) -> Self {
        if enabled {
            Self::enabled(reason)
        } else {
            Self::disabled(reason)
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    pub fn is_disabled(&self) -> bool {
        !self.is_enabled()
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Enabled { reason } | Self::Disabled { reason } => reason,
        }
    }

    pub fn decision(&self) -> &'static str {
        match self {
            Self::Enabled { .. } => "enabled",
            Self::Disabled { .. } => "disabled",
        }
    }
}

impl fmt::Display for EvaluationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.decision(), self.reason())
    }
}
