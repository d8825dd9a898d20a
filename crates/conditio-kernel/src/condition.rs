//! The conditional evaluation pipeline.
//!
//! ```text
//! Resolving ──► Binding ──► Synthesizing ──► Evaluating ──► Done
//!     │                                          │
//!     └─ ConditionError                          └─ script failure ⇒ Disabled
//! ```

use crate::bindings::{EnvironmentSnapshot, build_bindings};
use crate::config::{ConfigurationParameters, resolve_dialect};
use crate::context::SharedContext;
use crate::error::ConditionError;
use crate::evaluate::evaluate;
use crate::outcome::EvaluationOutcome;
use crate::registry::EngineRegistry;
use crate::spec::ConditionalSpec;
use crate::synthesize::{DialectFamily, synthesize};
use tracing::debug;

/// Reason reported when a unit of work carries no conditional.
pub const NOT_PRESENT_REASON: &str = "conditional script is not present";

/// Where the pipeline takes its environment snapshot from.
#[derive(Debug, Clone, Default)]
enum EnvironmentSource {
    #[default]
    Capture,
    Fixed(EnvironmentSnapshot),
}

/// Evaluates conditionals against a registry of script engines.
#[derive(Debug, Clone)]
pub struct ConditionalExecution<'r> {
    registry: &'r EngineRegistry,
    environment: EnvironmentSource,
}

impl ConditionalExecution<'static> {
    /// Pipeline over the process-wide registry.
    pub fn global() -> Self {
        Self::new(EngineRegistry::global())
    }
}

impl<'r> ConditionalExecution<'r> {
    pub fn new(registry: &'r EngineRegistry) -> Self {
        Self {
            registry,
            environment: EnvironmentSource::default(),
        }
    }

    /// Bind this snapshot instead of capturing the live environment.
    pub fn with_environment(mut self, snapshot: EnvironmentSnapshot) -> Self {
        self.environment = EnvironmentSource::Fixed(snapshot);
        self
    }

    /// Decide whether the unit of work guarded by `spec` should run.
    ///
    /// An absent conditional enables execution.
    pub fn evaluate(
        &self,
        spec: Option<&ConditionalSpec>,
        context: Option<&SharedContext>,
        config: &dyn ConfigurationParameters,
    ) -> Result<EvaluationOutcome, ConditionError> {
        let Some(spec) = spec else {
            return Ok(EvaluationOutcome::enabled(NOT_PRESENT_REASON));
        };
        if spec.lines.is_empty() {
            return Err(ConditionError::EmptyScript);
        }

        let dialect = resolve_dialect(&spec.dialect, config);
        let engine = self.registry.resolve(&dialect)?;
        debug!(dialect = %dialect, engine = %engine.descriptor(), "found script engine");

        let bindings = match &self.environment {
            EnvironmentSource::Capture => {
                build_bindings(spec, context, &EnvironmentSnapshot::capture())?
            }
            EnvironmentSource::Fixed(snapshot) => build_bindings(spec, context, snapshot)?,
        };
        debug!(
            count = bindings.len(),
            names = ?bindings.names().collect::<Vec<_>>(),
            "bindings"
        );

        let family = DialectFamily::from_language_name(&engine.descriptor().language_name);
        let script = synthesize(spec, family);
        debug!(family = %family, script = %script, "script to evaluate");

        Ok(evaluate(spec, engine.as_ref(), &bindings, &script))
    }
}
