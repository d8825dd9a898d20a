//! # Conditio Kernel
//!
//! Decides whether a unit of work should run by evaluating an embedded
//! script predicate against a chosen scripting dialect.
//!
//! The kernel does not define scripting languages: engines plug in through
//! [`ScriptEngine`] and are looked up by name, extension, or MIME type.
//!
//! ## Architecture
//!
//! ```text
//! EngineRegistry        ← dialect identifier → engine handle
//!     │
//! Bindings              ← context + environment snapshot (env$<key>)
//!     │
//! synthesize            ← lines + imports + delimiter → script text
//!     │
//! evaluate              ← script result → Enabled / Disabled + reason
//! ```
//!
//! [`ConditionalExecution`] runs the whole pipeline for one conditional.

pub mod bindings;
pub mod condition;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluate;
pub mod outcome;
pub mod registry;
#[cfg(feature = "rhai-engine")]
pub mod rhai_engine;
pub mod spec;
pub mod synthesize;

#[cfg(test)]
mod test_support;

pub use bindings::{
    BindingValue, Bindings, CONTEXT_BINDING, ENVIRONMENT_PREFIX, EnvironmentSnapshot,
    build_bindings,
};
pub use condition::{ConditionalExecution, NOT_PRESENT_REASON};
pub use config::{
    ConfigurationParameters, DEFAULT_ENGINE_PROPERTY_NAME, DEFAULT_ENGINE_PROPERTY_VALUE,
    NoConfiguration, resolve_dialect,
};
pub use context::{ExecutionContext, RecordingContext, ReportEntry, SharedContext};
pub use error::{ConditionError, ScriptError};
pub use evaluate::{ScriptValue, evaluate};
pub use outcome::EvaluationOutcome;
pub use registry::{EngineDescriptor, EngineHandle, EngineRegistry, ScriptEngine};
#[cfg(feature = "rhai-engine")]
pub use rhai_engine::RhaiScriptEngine;
pub use spec::ConditionalSpec;
pub use synthesize::{DialectFamily, LINE_SEPARATOR, synthesize};
