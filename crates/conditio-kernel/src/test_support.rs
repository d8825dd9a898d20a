//! Stub engines shared by unit tests.

use crate::bindings::Bindings;
use crate::error::ScriptError;
use crate::evaluate::ScriptValue;
use crate::registry::{EngineDescriptor, ScriptEngine};
use std::sync::Mutex;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn javascript_descriptor() -> EngineDescriptor {
    EngineDescriptor {
        engine_name: "Stub JavaScript".to_string(),
        language_name: "ECMAScript".to_string(),
        names: strings(&["nashorn", "javascript", "ecmascript"]),
        extensions: strings(&["js"]),
        mime_types: strings(&[
            "application/javascript",
            "application/ecmascript",
            "text/javascript",
            "text/ecmascript",
        ]),
    }
}

pub fn groovy_descriptor() -> EngineDescriptor {
    EngineDescriptor {
        engine_name: "Stub Groovy".to_string(),
        language_name: "Groovy".to_string(),
        names: strings(&["groovy"]),
        extensions: strings(&["groovy"]),
        mime_types: Vec::new(),
    }
}

/// Recorded call: script text and bound names.
#[derive(Debug, Clone)]
pub struct StubCall {
    pub script: String,
    pub binding_names: Vec<String>,
}

/// Engine returning a canned result and recording what it was asked to run.
pub struct StubEngine {
    descriptor: EngineDescriptor,
    result: Result<ScriptValue, ScriptError>,
    calls: Mutex<Vec<StubCall>>,
}

impl StubEngine {
    pub fn new(descriptor: EngineDescriptor, value: ScriptValue) -> Self {
        Self {
            descriptor,
            result: Ok(value),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(descriptor: EngineDescriptor, message: &str) -> Self {
        Self {
            descriptor,
            result: Err(ScriptError::new(message)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().expect("stub lock").clone()
    }
}

impl ScriptEngine for StubEngine {
    fn descriptor(&self) -> &EngineDescriptor {
        &self.descriptor
    }

    fn eval(&self, script: &str, bindings: &Bindings) -> Result<ScriptValue, ScriptError> {
        self.calls.lock().expect("stub lock").push(StubCall {
            script: script.to_string(),
            binding_names: bindings.names().map(str::to_string).collect(),
        });
        self.result.clone()
    }
}
