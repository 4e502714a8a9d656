use crate::error::{ContextError, Result};
use serde_json::{Map, Value};

/// Parses a raw event payload as delivered by the Actions runner.
///
/// An empty body yields an empty object so that workflows triggered without
/// a payload still produce a usable context.
pub fn parse_event_payload(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let event: Value = serde_json::from_slice(body)?;

    if !event.is_object() {
        return Err(ContextError::InvalidPayload(format!(
            "expected a JSON object, got {}",
            kind_of(&event)
        )));
    }

    Ok(event)
}

/// Returns the top-level field `key` of `event` if it is a JSON object.
pub fn event_object<'a>(event: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    event.get(key)?.as_object()
}

/// Reads the integer field `key` of an event object.
///
/// Read as a floating point value and truncated, matching how generic JSON
/// decoders surface numbers. Non-numeric values yield `None`.
pub fn number_field(object: &Map<String, Value>, key: &str) -> Option<i64> {
    let number = object.get(key)?.as_f64()?;
    Some(number as i64)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
