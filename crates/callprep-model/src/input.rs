//! Classification of raw caller input.

use serde_json::{Map, Value};

/// Input as handed to the validator, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Free text.
    Text(String),
    /// A key/value payload.
    Structured(Map<String, Value>),
    /// Anything else (numbers, booleans, arrays, null).
    Unsupported(Value),
}

impl RawInput {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Short label of the input shape, safe to log.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Structured(_) => "structured",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Structured(map),
            other => Self::Unsupported(other),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Map<String, Value>> for RawInput {
    fn from(map: Map<String, Value>) -> Self {
        Self::Structured(map)
    }
}
