use serde_json::{Map, Value};

use crate::{
    paths::LazyLocation,
    tracing::{NodeEvaluationResult, TracingCallback, TracingContext},
};

/// Whether `candidate` satisfies the field and kind contract of `reference`.
///
/// - A `null` reference node accepts any candidate node.
/// - Every key of a reference object must be present in the candidate object, even when
///   its reference value is `null`. Extra candidate keys are ignored.
/// - Arrays are represented by their first element. An empty reference array accepts any
///   candidate array, an empty candidate array fails a non-empty reference array.
/// - Scalars only need to be of the same kind, values are never compared.
#[must_use]
pub fn is_compatible_values(reference: &Value, candidate: &Value) -> bool {
    match (reference, candidate) {
        (Value::Null, _) => true,
        (Value::Object(reference), Value::Object(candidate)) => {
            objects_are_compatible(reference, candidate)
        }
        (Value::Array(reference), Value::Array(candidate)) => {
            match (reference.first(), candidate.first()) {
                (None, _) => true,
                (Some(_), None) => false,
                (Some(reference), Some(candidate)) => is_compatible_values(reference, candidate),
            }
        }
        (Value::Bool(_), Value::Bool(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_)) => true,
        _ => false,
    }
}

#[inline]
fn objects_are_compatible(reference: &Map<String, Value>, candidate: &Map<String, Value>) -> bool {
    if reference.len() > candidate.len() {
        // Some required key is missing
        return false;
    }
    for (key, expected) in reference {
        let Some(actual) = candidate.get(key) else {
            return false;
        };
        if !expected.is_null() && !is_compatible_values(expected, actual) {
            return false;
        }
    }
    true
}

/// Same verdict as [`is_compatible_values`], reporting every evaluated node pair to
/// `callback`.
pub fn is_compatible_values_with_tracing(
    reference: &Value,
    candidate: &Value,
    callback: TracingCallback<'_>,
) -> bool {
    evaluate(reference, candidate, &LazyLocation::new(), callback)
}

fn evaluate(
    reference: &Value,
    candidate: &Value,
    location: &LazyLocation<'_>,
    callback: TracingCallback<'_>,
) -> bool {
    let result = match (reference, candidate) {
        (Value::Null, _) => {
            TracingContext::new(location, NodeEvaluationResult::Ignored).call(callback);
            return true;
        }
        (Value::Object(reference), Value::Object(candidate)) => {
            evaluate_object(reference, candidate, location, &mut *callback)
        }
        (Value::Array(reference), Value::Array(candidate)) => {
            match (reference.first(), candidate.first()) {
                (None, _) => true,
                (Some(_), None) => false,
                (Some(reference), Some(candidate)) => {
                    let item = location.push(0);
                    evaluate(reference, candidate, &item, &mut *callback)
                }
            }
        }
        (Value::Bool(_), Value::Bool(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_)) => true,
        _ => false,
    };
    TracingContext::new(location, result).call(callback);
    result
}

fn evaluate_object(
    reference: &Map<String, Value>,
    candidate: &Map<String, Value>,
    location: &LazyLocation<'_>,
    callback: TracingCallback<'_>,
) -> bool {
    for (key, expected) in reference {
        let property = location.push(key.as_str());
        let Some(actual) = candidate.get(key) else {
            TracingContext::new(&property, NodeEvaluationResult::Incompatible)
                .call(&mut *callback);
            return false;
        };
        // A `null` reference value is reported as ignored by `evaluate`
        if !evaluate(expected, actual, &property, &mut *callback) {
            return false;
        }
    }
    true
}
