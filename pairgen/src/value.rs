//! Attribute values and their text form.

pub use serde_json::Value;

/// The text a value renders as.
///
/// Null renders as the empty string, strings verbatim, everything else in its
/// compact JSON form (`true`, `5`, `[1,2]`).
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Text of an optional value; absent renders like null.
pub fn opt_to_text(value: Option<&Value>) -> String {
    value.map(to_text).unwrap_or_default()
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
