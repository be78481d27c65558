//! Unwrap policies applied to the `{"results": [...]}` response envelope.

use serde_json::Value;

use crate::Error;

/// How a decoded response envelope is turned into the caller-facing value.
#[derive(Clone, Copy, Debug, Default)]
pub enum Unwrap {
    /// Return the envelope unchanged.
    Identity,
    /// Return the `results` array.
    Results,
    /// Return element 0 of `results`. Used by detail lookups.
    #[default]
    FirstResult,
    /// Apply a projection; `None` means the envelope had the wrong shape.
    Custom(fn(Value) -> Option<Value>),
}

impl Unwrap {
    /// Applies this policy to a decoded envelope.
    pub fn apply(self, envelope: Value) -> Result<Value, Error> {
        match self {
            Unwrap::Identity => Ok(envelope),
            Unwrap::Results => results(envelope).map(Value::Array),
            Unwrap::FirstResult => results(envelope)?
                .into_iter()
                .next()
                .ok_or_else(|| Error::Envelope("`results` is empty".to_string())),
            Unwrap::Custom(project) => project(envelope)
                .ok_or_else(|| Error::Envelope("custom projection returned nothing".to_string())),
        }
    }
}

/// Takes the `results` array out of an envelope.
pub fn results(envelope: Value) -> Result<Vec<Value>, Error> {
    match envelope {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(Error::Envelope(format!(
                "`results` is not an array: {}",
                kind(&other)
            ))),
            None => Err(Error::Envelope("missing `results`".to_string())),
        },
        other => Err(Error::Envelope(format!(
            "expected an object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
