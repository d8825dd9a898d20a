//! Run a synthesized script and classify its result.

use crate::bindings::Bindings;
use crate::outcome::EvaluationOutcome;
use crate::registry::ScriptEngine;
use crate::spec::ConditionalSpec;
use std::fmt;
use tracing::debug;

/// Raw value a script evaluated to.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Null,
    Bool(bool),
    Int(i64),
    /// `text` is the engine's own rendering, used in the default reason.
    Float { value: f64, text: String },
    Text(String),
    /// The script built a decision itself.
    Outcome(EvaluationOutcome),
}

impl ScriptValue {
    /// Float rendered with Rust's `Debug` form, which keeps the `.0`.
    pub fn float(value: f64) -> Self {
        Self::Float {
            value,
            text: format!("{value:?}"),
        }
    }

    /// Only the text `true`, ignoring ASCII case, counts as true.
    pub fn parses_as_true(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) => text.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float { text, .. } => f.write_str(text),
            Self::Text(text) => f.write_str(text),
            Self::Outcome(outcome) => write!(f, "{outcome}"),
        }
    }
}

/// Evaluate `script` and turn the result into a decision.
///
/// Script failures disable execution with the failure message as reason.
pub fn evaluate(
    spec: &ConditionalSpec,
    engine: &dyn ScriptEngine,
    bindings: &Bindings,
    script: &str,
) -> EvaluationOutcome {
    match engine.eval(script, bindings) {
        Ok(value) => classify(spec, script, value),
        Err(err) => {
            debug!(
                engine = %engine.descriptor(),
                error = %err,
                "evaluation of conditional script failed, disabling execution"
            );
            EvaluationOutcome::disabled(err.message)
        }
    }
}

/// Classify a successful script result.
pub fn classify(spec: &ConditionalSpec, script: &str, value: ScriptValue) -> EvaluationOutcome {
    if let ScriptValue::Outcome(outcome) = value {
        return outcome;
    }
    let reason = if spec.reason.is_empty() {
        format!("Script `{script}` evaluated to: {value}")
    } else {
        spec.reason.clone()
    };
    EvaluationOutcome::from_decision(value.parses_as_true(), reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubEngine, javascript_descriptor};

    fn run(spec: &ConditionalSpec, value: ScriptValue) -> EvaluationOutcome {
        let engine = StubEngine::new(javascript_descriptor(), value);
        evaluate(spec, &engine, &Bindings::new(), &spec.lines[0])
    }

    #[test]
    fn true_result_enables() {
        let outcome = run(&ConditionalSpec::new(["true"]), ScriptValue::Bool(true));
        assert_eq!(
            outcome,
            EvaluationOutcome::enabled("Script `true` evaluated to: true")
        );
    }

    #[test]
    fn true_text_matches_ignoring_case() {
        let spec = ConditionalSpec::new(["'TRUE'"]);
        assert!(run(&spec, ScriptValue::Text("TRUE".into())).is_enabled());
        assert!(run(&spec, ScriptValue::Text("True".into())).is_enabled());
    }

    #[test]
    fn anything_but_true_disables() {
        let spec = ConditionalSpec::new(["1 == 2"]);
        for value in [
            ScriptValue::Bool(false),
            ScriptValue::Null,
            ScriptValue::Int(1),
            ScriptValue::float(1.0),
            ScriptValue::Text("yes".into()),
            ScriptValue::Text(" true".into()),
        ] {
            assert!(run(&spec, value.clone()).is_disabled(), "{value:?}");
        }
    }

    #[test]
    fn null_result_is_reported_as_null() {
        let outcome = run(&ConditionalSpec::new(["nothing()"]), ScriptValue::Null);
        assert_eq!(outcome.reason(), "Script `nothing()` evaluated to: null");
    }

    #[test]
    fn custom_reason_is_used_verbatim() {
        let spec = ConditionalSpec::new(["x"]).with_reason("no result, no execution");
        for value in [ScriptValue::Bool(true), ScriptValue::Null] {
            assert_eq!(run(&spec, value).reason(), "no result, no execution");
        }
    }

    #[test]
    fn script_built_outcome_passes_through() {
        let spec = ConditionalSpec::new(["disabled('No go.')"]).with_reason("ignored");
        let outcome = run(
            &spec,
            ScriptValue::Outcome(EvaluationOutcome::disabled("No go.")),
        );
        assert_eq!(outcome, EvaluationOutcome::disabled("No go."));
    }

    #[test]
    fn script_failure_disables_with_failure_message() {
        let spec = ConditionalSpec::new(["syntactically, some thing is not right"]);
        let engine = StubEngine::failing(javascript_descriptor(), "unexpected token: some");
        let outcome = evaluate(&spec, &engine, &Bindings::new(), &spec.lines[0]);
        assert_eq!(
            outcome,
            EvaluationOutcome::disabled("unexpected token: some")
        );
    }

    #[test]
    fn float_reason_keeps_the_engine_rendering() {
        let spec = ConditionalSpec::new(["1.0"]);
        assert_eq!(
            run(&spec, ScriptValue::float(1.0)).reason(),
            "Script `1.0` evaluated to: 1.0"
        );
        let rendered = ScriptValue::Float {
            value: 1e21,
            text: "1e21".to_string(),
        };
        assert_eq!(
            run(&spec, rendered).reason(),
            "Script `1.0` evaluated to: 1e21"
        );
    }

    #[test]
    fn default_reason_embeds_script_and_result() {
        let spec = ConditionalSpec::new(["let a = 1;", "a + 1"]).with_delimiter("\n");
        let outcome = classify(&spec, "let a = 1;\na + 1", ScriptValue::Int(2));
        assert!(outcome.reason().contains("let a = 1;\na + 1"));
        assert!(outcome.reason().ends_with(": 2"));
    }
}
