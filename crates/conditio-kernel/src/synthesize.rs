//! Turn a conditional's lines and imports into executable script text.
//!
//! Import syntax differs per language, so synthesis branches on the dialect
//! family of the resolved engine.

use crate::spec::ConditionalSpec;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Line separator used when a conditional leaves its delimiter empty.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DialectFamily {
    /// `JavaImporter` + `with` block.
    #[serde(rename = "javascript")]
    JavaScriptLike,
    /// One `import` statement per name.
    #[serde(rename = "groovy")]
    GroovyLike,
    /// Imports are ignored.
    #[serde(rename = "generic")]
    Generic,
}

impl DialectFamily {
    /// Family for an engine's declared language name.
    pub fn from_language_name(language: &str) -> Self {
        let language = language.trim();
        if language.eq_ignore_ascii_case("ecmascript") || language.eq_ignore_ascii_case("javascript")
        {
            Self::JavaScriptLike
        } else if language.eq_ignore_ascii_case("groovy") {
            Self::GroovyLike
        } else {
            Self::Generic
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::JavaScriptLike => "javascript",
            Self::GroovyLike => "groovy",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for DialectFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesize the script text for `spec`.
///
/// A single line without imports is returned borrowed and untouched.
pub fn synthesize(spec: &ConditionalSpec, family: DialectFamily) -> Cow<'_, str> {
    if let ([only], []) = (spec.lines.as_slice(), spec.imports.as_slice()) {
        return Cow::Borrowed(only.as_str());
    }

    let delimiter = effective_delimiter(&spec.delimiter);
    match family {
        DialectFamily::JavaScriptLike if !spec.imports.is_empty() => {
            Cow::Owned(javascript_with_importer(spec).join(delimiter))
        }
        DialectFamily::GroovyLike => Cow::Owned(groovy_with_imports(spec).join(delimiter)),
        DialectFamily::JavaScriptLike | DialectFamily::Generic => {
            Cow::Owned(spec.lines.join(delimiter))
        }
    }
}

fn effective_delimiter(delimiter: &str) -> &str {
    if delimiter.is_empty() {
        LINE_SEPARATOR
    } else {
        delimiter
    }
}

fn javascript_with_importer(spec: &ConditionalSpec) -> Vec<String> {
    let mut lines = Vec::with_capacity(spec.lines.len() + 4);
    lines.push(format!(
        "var javaImporter = new JavaImporter({})",
        spec.imports.join(", ")
    ));
    lines.push("with (javaImporter) {".to_string());
    lines.extend(spec.lines.iter().map(|line| format!("  {line}")));
    lines.push("}".to_string());
    lines.push(String::new());
    lines
}

fn groovy_with_imports(spec: &ConditionalSpec) -> Vec<String> {
    let mut lines: Vec<String> = spec
        .imports
        .iter()
        .map(|name| format!("import {name}"))
        .collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.extend(spec.lines.iter().cloned());
    lines
}
