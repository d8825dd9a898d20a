//! Names visible to a conditional script.
//!
//! Bindings are assembled fresh for every evaluation and dropped with it.

use crate::context::SharedContext;
use crate::error::ConditionError;
use crate::spec::ConditionalSpec;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Identifier the execution context is bound to.
pub const CONTEXT_BINDING: &str = "context";

/// Prefix for environment-derived identifiers.
pub const ENVIRONMENT_PREFIX: &str = "env$";

#[derive(Clone)]
pub enum BindingValue {
    Context(SharedContext),
    Text(String),
}

impl fmt::Debug for BindingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context(context) => write!(f, "Context({:?})", context.display_name()),
            Self::Text(text) => write!(f, "Text({text:?})"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: BTreeMap<String, BindingValue>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: BindingValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&BindingValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(BindingValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BindingValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = (&'a String, &'a BindingValue);
    type IntoIter = btree_map::Iter<'a, String, BindingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered snapshot of platform properties and environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    entries: Vec<(String, String)>,
}

impl EnvironmentSnapshot {
    /// Platform properties first, then the process environment.
    pub fn capture() -> Self {
        let mut entries = vec![
            ("os.name".to_string(), std::env::consts::OS.to_string()),
            ("os.arch".to_string(), std::env::consts::ARCH.to_string()),
            ("os.family".to_string(), std::env::consts::FAMILY.to_string()),
            (
                "line.separator".to_string(),
                crate::synthesize::LINE_SEPARATOR.to_string(),
            ),
        ];
        if let Ok(dir) = std::env::current_dir() {
            entries.push(("user.dir".to_string(), dir.display().to_string()));
        }
        entries.extend(std::env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }));
        Self { entries }
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

/// `os.arch` becomes `env$os_arch`.
pub fn environment_identifier(key: &str) -> String {
    format!("{ENVIRONMENT_PREFIX}{}", key.replace('.', "_"))
}

/// Assemble the bindings for one evaluation.
///
/// Environment keys that collapse to the same identifier resolve by
/// last-write-wins in snapshot order.
pub fn build_bindings(
    spec: &ConditionalSpec,
    context: Option<&SharedContext>,
    environment: &EnvironmentSnapshot,
) -> Result<Bindings, ConditionError> {
    let mut bindings = Bindings::new();
    if spec.bind_context {
        let context = context.ok_or(ConditionError::MissingContext)?;
        bindings.insert(CONTEXT_BINDING, BindingValue::Context(context.clone()));
    }
    if spec.bind_environment {
        for (key, value) in environment.entries() {
            bindings.insert(
                environment_identifier(key),
                BindingValue::Text(value.clone()),
            );
        }
    }
    Ok(bindings)
}
