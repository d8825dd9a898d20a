//! Built-in script engine backed by Rhai.
//!
//! Every evaluation gets a fresh `rhai::Engine` and `rhai::Scope`, so no state
//! leaks between conditionals. Scripts can build a decision directly with
//! `enabled(reason)` / `disabled(reason)` and publish diagnostics through
//! `context.publish_entry(key, value)`.
//!
//! Rhai identifiers cannot hold `$`, `.` or `-`, so binding names are
//! rewritten with [`rhai_identifier`] (`env$os_arch` becomes `env_os_arch`).
//! When two bindings rewrite to the same identifier, the one whose original
//! name sorts first is kept and the other is not visible to the script.

use crate::bindings::{BindingValue, Bindings};
use crate::context::{DEFAULT_ENTRY_KEY, SharedContext};
use crate::error::ScriptError;
use crate::evaluate::ScriptValue;
use crate::outcome::EvaluationOutcome;
use crate::registry::{EngineDescriptor, ScriptEngine};
use rhai::{Dynamic, Engine, Scope};

pub const RHAI_ENGINE_NAME: &str = "rhai";
pub const RHAI_LANGUAGE_NAME: &str = "Rhai";

#[derive(Clone)]
struct ContextHandle(SharedContext);

pub struct RhaiScriptEngine {
    descriptor: EngineDescriptor,
}

impl RhaiScriptEngine {
    pub fn new() -> Self {
        Self {
            descriptor: EngineDescriptor {
                engine_name: RHAI_ENGINE_NAME.to_string(),
                language_name: RHAI_LANGUAGE_NAME.to_string(),
                names: vec!["rhai".to_string()],
                extensions: vec!["rhai".to_string()],
                mime_types: vec!["text/x-rhai".to_string(), "application/x-rhai".to_string()],
            },
        }
    }

    fn build_engine() -> Engine {
        let mut engine = Engine::new();

        engine.register_type_with_name::<EvaluationOutcome>("EvaluationOutcome");
        engine.register_fn("enabled", |reason: &str| EvaluationOutcome::enabled(reason));
        engine.register_fn("disabled", |reason: &str| {
            EvaluationOutcome::disabled(reason)
        });
        engine.register_get("reason", |outcome: &mut EvaluationOutcome| {
            outcome.reason().to_string()
        });

        engine.register_type_with_name::<ContextHandle>("ExecutionContext");
        engine.register_fn(
            "publish_entry",
            |context: &mut ContextHandle, key: &str, value: &str| {
                context.0.publish_entry(key, value);
            },
        );
        engine.register_fn("publish_entry", |context: &mut ContextHandle, value: &str| {
            context.0.publish_entry(DEFAULT_ENTRY_KEY, value);
        });
        engine.register_get("display_name", |context: &mut ContextHandle| {
            context.0.display_name().to_string()
        });

        engine
    }

    fn scope_for(bindings: &Bindings) -> Scope<'static> {
        let mut scope = Scope::new();
        for (name, value) in bindings {
            let name = rhai_identifier(name);
            if scope.contains(&name) {
                continue;
            }
            match value {
                BindingValue::Context(context) => {
                    scope.push(name, ContextHandle(context.clone()));
                }
                BindingValue::Text(text) => {
                    scope.push(name, text.clone());
                }
            }
        }
        scope
    }
}

impl Default for RhaiScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptEngine for RhaiScriptEngine {
    fn descriptor(&self) -> &EngineDescriptor {
        &self.descriptor
    }

    fn eval(&self, script: &str, bindings: &Bindings) -> Result<ScriptValue, ScriptError> {
        let engine = Self::build_engine();
        let mut scope = Self::scope_for(bindings);
        let value = engine
            .eval_with_scope::<Dynamic>(&mut scope, script)
            .map_err(|err| ScriptError::new(err.to_string()))?;
        Ok(script_value(value))
    }
}

/// Rewrite a binding name into a valid Rhai variable name.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, so `env$os_arch` is
/// visible to scripts as `env_os_arch`.
pub fn rhai_identifier(name: &str) -> String {
    let mut identifier: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }
    identifier
}

fn script_value(value: Dynamic) -> ScriptValue {
    if value.is_unit() {
        return ScriptValue::Null;
    }
    if value.is::<EvaluationOutcome>() {
        return ScriptValue::Outcome(value.cast::<EvaluationOutcome>());
    }
    if let Ok(flag) = value.as_bool() {
        return ScriptValue::Bool(flag);
    }
    if let Ok(number) = value.as_int() {
        return ScriptValue::Int(i64::from(number));
    }
    if let Ok(number) = value.as_float() {
        return ScriptValue::Float {
            value: f64::from(number),
            text: value.to_string(),
        };
    }
    ScriptValue::Text(value.to_string())
}
