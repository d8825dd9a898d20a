//! The execution context a conditional script may call back into.
//!
//! The kernel treats the context as opaque: it is produced by the caller's
//! lifecycle and only its publish capability is relied upon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Capability surface scripts see through the bound context.
pub trait ExecutionContext: Send + Sync {
    /// Human-readable name of the unit of work being gated.
    fn display_name(&self) -> &str {
        ""
    }

    /// Publish a diagnostic key/value entry.
    fn publish_entry(&self, key: &str, value: &str);
}

pub type SharedContext = Arc<dyn ExecutionContext>;

/// Key used when a script publishes a bare value.
pub const DEFAULT_ENTRY_KEY: &str = "value";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub key: String,
    pub value: String,
}

/// Context that records every published entry in order.
#[derive(Default)]
pub struct RecordingContext {
    display_name: String,
    entries: Mutex<Vec<ReportEntry>>,
}

impl RecordingContext {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<ReportEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ExecutionContext for RecordingContext {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn publish_entry(&self, key: &str, value: &str) {
        let entry = ReportEntry {
            key: key.to_string(),
            value: value.to_string(),
        };
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

impl fmt::Debug for RecordingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingContext")
            .field("display_name", &self.display_name)
            .field("entries", &self.entries().len())
            .finish()
    }
}
