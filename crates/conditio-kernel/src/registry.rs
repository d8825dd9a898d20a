//! Script engine registry and dialect lookup.
//!
//! Engines are registered once and then only read. A dialect identifier is
//! matched against engine names, then file extensions, then MIME types; the
//! first match wins.

use crate::bindings::Bindings;
use crate::error::{ConditionError, ScriptError};
use crate::evaluate::ScriptValue;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Static metadata an engine advertises for lookup and dialect selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineDescriptor {
    pub engine_name: String,
    /// Language name; decides the dialect family used for synthesis.
    pub language_name: String,
    pub names: Vec<String>,
    pub extensions: Vec<String>,
    pub mime_types: Vec<String>,
}

impl fmt::Display for EngineDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.engine_name, self.language_name)
    }
}

/// An interpreter able to evaluate synthesized script text.
///
/// Each call to [`ScriptEngine::eval`] must run in its own scope: bindings
/// from one evaluation are never visible to another.
pub trait ScriptEngine: Send + Sync {
    fn descriptor(&self) -> &EngineDescriptor;

    fn eval(&self, script: &str, bindings: &Bindings) -> Result<ScriptValue, ScriptError>;
}

pub type EngineHandle = Arc<dyn ScriptEngine>;

#[derive(Clone, Default)]
pub struct EngineRegistry {
    engines: Vec<EngineHandle>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every engine compiled into this crate.
    pub fn with_builtin_engines() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "rhai-engine")]
        registry.register(crate::rhai_engine::RhaiScriptEngine::new());
        registry
    }

    /// Process-wide registry, populated with the built-in engines on first use.
    pub fn global() -> &'static EngineRegistry {
        static GLOBAL: OnceLock<EngineRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_builtin_engines)
    }

    pub fn register<E>(&mut self, engine: E) -> &mut Self
    where
        E: ScriptEngine + 'static,
    {
        self.engines.push(Arc::new(engine));
        self
    }

    pub fn register_handle(&mut self, engine: EngineHandle) -> &mut Self {
        self.engines.push(engine);
        self
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &EngineDescriptor> {
        self.engines.iter().map(|engine| engine.descriptor())
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<EngineHandle> {
        self.find(|descriptor| &descriptor.names, name)
    }

    pub fn by_extension(&self, extension: &str) -> Option<EngineHandle> {
        self.find(|descriptor| &descriptor.extensions, extension)
    }

    pub fn by_mime_type(&self, mime_type: &str) -> Option<EngineHandle> {
        self.find(|descriptor| &descriptor.mime_types, mime_type)
    }

    /// Resolve a dialect identifier to an engine.
    pub fn resolve(&self, identifier: &str) -> Result<EngineHandle, ConditionError> {
        if identifier.is_empty() {
            return Err(ConditionError::EmptyEngineIdentifier);
        }
        self.by_name(identifier)
            .or_else(|| self.by_extension(identifier))
            .or_else(|| self.by_mime_type(identifier))
            .ok_or_else(|| ConditionError::EngineNotFound {
                identifier: identifier.to_string(),
            })
    }

    fn find<F>(&self, aliases: F, key: &str) -> Option<EngineHandle>
    where
        F: Fn(&EngineDescriptor) -> &Vec<String>,
    {
        self.engines
            .iter()
            .find(|engine| aliases(engine.descriptor()).iter().any(|alias| alias == key))
            .cloned()
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.descriptors().map(|descriptor| &descriptor.engine_name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubEngine, groovy_descriptor, javascript_descriptor};

    fn registry() -> EngineRegistry {
        let mut registry = EngineRegistry::new();
        registry
            .register(StubEngine::new(javascript_descriptor(), ScriptValue::Bool(true)))
            .register(StubEngine::new(groovy_descriptor(), ScriptValue::Bool(true)));
        registry
    }

    fn resolved_engine_name(registry: &EngineRegistry, identifier: &str) -> String {
        registry
            .resolve(identifier)
            .unwrap_or_else(|e| panic!("{identifier} should resolve: {e}"))
            .descriptor()
            .engine_name
            .clone()
    }

    #[test]
    fn resolves_javascript_by_every_alias_kind() {
        let registry = registry();
        for identifier in [
            "nashorn",
            "javascript",
            "ecmascript",
            "js",
            "application/javascript",
            "application/ecmascript",
            "text/javascript",
            "text/ecmascript",
        ] {
            assert_eq!(resolved_engine_name(&registry, identifier), "Stub JavaScript");
        }
    }

    #[test]
    fn resolution_is_repeatable() {
        let registry = registry();
        let first = registry.resolve("groovy").expect("groovy should resolve");
        let second = registry.resolve("groovy").expect("groovy should resolve");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn name_match_wins_over_extension_match() {
        let mut registry = EngineRegistry::new();
        let mut by_extension = javascript_descriptor();
        by_extension.engine_name = "extension".to_string();
        by_extension.names = Vec::new();
        by_extension.extensions = vec!["shared".to_string()];
        let mut by_name = groovy_descriptor();
        by_name.engine_name = "name".to_string();
        by_name.names = vec!["shared".to_string()];
        registry
            .register(StubEngine::new(by_extension, ScriptValue::Null))
            .register(StubEngine::new(by_name, ScriptValue::Null));
        assert_eq!(resolved_engine_name(&registry, "shared"), "name");
    }

    #[test]
    fn unknown_identifier_is_a_configuration_error() {
        let err = registry()
            .resolve("?!")
            .err()
            .expect("unknown identifier should fail");
        assert_eq!(
            err,
            ConditionError::EngineNotFound {
                identifier: "?!".to_string()
            }
        );
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let err = registry().resolve("").err().expect("empty should fail");
        assert_eq!(err, ConditionError::EmptyEngineIdentifier);
    }

    #[cfg(feature = "rhai-engine")]
    #[test]
    fn global_registry_carries_rhai() {
        let registry = EngineRegistry::global();
        for identifier in ["rhai", "text/x-rhai", "application/x-rhai"] {
            assert!(registry.resolve(identifier).is_ok(), "{identifier}");
        }
    }
}
