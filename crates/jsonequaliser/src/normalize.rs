use serde::de::{Error as _, Unexpected};
use serde_json::Value;

use crate::error::ErrorKind;

/// Reduce a JSON document to the single object that represents its shape.
///
/// A top-level object is returned as is. A top-level array is represented by its first
/// element, which must be an object. The rest of the array is ignored.
///
/// # Errors
///
/// - [`ErrorKind::InvalidJson`] if `text` is not valid JSON, its top level is a scalar, or
///   it is an array whose first element is not an object.
/// - [`ErrorKind::EmptyArray`] if `text` is an empty array.
pub fn normalize(text: &str) -> Result<Value, ErrorKind> {
    match serde_json::from_str::<Value>(text).map_err(ErrorKind::InvalidJson)? {
        object @ Value::Object(_) => Ok(object),
        Value::Array(items) => match items.into_iter().next() {
            Some(object @ Value::Object(_)) => Ok(object),
            Some(other) => Err(invalid_type(&other, "an array of JSON objects")),
            None => Err(ErrorKind::EmptyArray),
        },
        scalar => Err(invalid_type(&scalar, "a JSON object or array")),
    }
}

fn invalid_type(value: &Value, expected: &str) -> ErrorKind {
    ErrorKind::InvalidJson(serde_json::Error::invalid_type(
        unexpected(value),
        &expected,
    ))
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Other("null"),
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Unexpected::Unsigned(u)
            } else if let Some(i) = n.as_i64() {
                Unexpected::Signed(i)
            } else {
                Unexpected::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
