//! The declarative conditional handed to the kernel by its caller.

use serde::{Deserialize, Serialize};

/// Declared default for every optional `ConditionalSpec` field.
///
/// Both deserialization and the builder methods read from this table.
pub mod defaults {
    /// Empty means "use the configured default engine".
    pub const DIALECT: &str = "";
    /// Empty means "use the platform line separator".
    pub const DELIMITER: &str = "";
    pub const IMPORTS: &[&str] = &[];
    pub const BIND_CONTEXT: bool = true;
    pub const BIND_ENVIRONMENT: bool = true;
    /// Empty means "synthesize a reason from the script and its result".
    pub const REASON: &str = "";

    pub(crate) fn bind_context() -> bool {
        BIND_CONTEXT
    }

    pub(crate) fn bind_environment() -> bool {
        BIND_ENVIRONMENT
    }
}

/// A script predicate plus the options controlling how it is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalSpec {
    /// Engine name, extension, or MIME type.
    #[serde(default)]
    pub dialect: String,
    /// Script body; must hold at least one line.
    pub lines: Vec<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub delimiter: String,
    #[serde(default = "defaults::bind_context")]
    pub bind_context: bool,
    #[serde(default = "defaults::bind_environment")]
    pub bind_environment: bool,
    #[serde(default)]
    pub reason: String,
}

impl ConditionalSpec {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dialect: defaults::DIALECT.to_string(),
            lines: lines.into_iter().map(Into::into).collect(),
            imports: defaults::IMPORTS.iter().map(|s| s.to_string()).collect(),
            delimiter: defaults::DELIMITER.to_string(),
            bind_context: defaults::BIND_CONTEXT,
            bind_environment: defaults::BIND_ENVIRONMENT,
            reason: defaults::REASON.to_string(),
        }
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_bind_context(mut self, bind: bool) -> Self {
        self.bind_context = bind;
        self
    }

    pub fn with_bind_environment(mut self, bind: bool) -> Self {
        self.bind_environment = bind;
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}
