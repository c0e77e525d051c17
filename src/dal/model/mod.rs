use serde_json::Value;

pub mod resolved;
pub mod secret_request;
pub mod secret_value;

/// Short name of a JSON value's type, for error messages and debug lines.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
