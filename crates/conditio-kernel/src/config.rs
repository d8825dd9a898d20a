//! Configuration lookup for process-wide defaults.

use std::collections::{BTreeMap, HashMap};

/// Configuration key naming the engine used when a conditional leaves its
/// dialect empty.
pub const DEFAULT_ENGINE_PROPERTY_NAME: &str = "default-conditional-script-engine";

/// Engine used when neither the conditional nor the configuration names one.
pub const DEFAULT_ENGINE_PROPERTY_VALUE: &str = "rhai";

/// Key/value configuration source queried by the kernel.
pub trait ConfigurationParameters {
    fn configured_value(&self, key: &str) -> Option<String>;
}

/// Configuration source with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConfiguration;

impl ConfigurationParameters for NoConfiguration {
    fn configured_value(&self, _key: &str) -> Option<String> {
        None
    }
}

impl ConfigurationParameters for BTreeMap<String, String> {
    fn configured_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigurationParameters for HashMap<String, String> {
    fn configured_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Pick the engine identifier for a conditional.
///
/// A non-empty dialect wins; otherwise the configured default, otherwise
/// [`DEFAULT_ENGINE_PROPERTY_VALUE`]. A configured empty value counts as unset.
pub fn resolve_dialect(dialect: &str, config: &dyn ConfigurationParameters) -> String {
    if !dialect.is_empty() {
        return dialect.to_string();
    }
    config
        .configured_value(DEFAULT_ENGINE_PROPERTY_NAME)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENGINE_PROPERTY_VALUE.to_string())
}
