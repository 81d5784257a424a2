use jsonequaliser::{is_compatible, ErrorKind};
use serde_json::{json, Value};
use test_case::test_case;

const SIMPLE: &str = r#"{"firstname": "chris", "lastname": "james", "age": 30}"#;
const SEARCH_RESULT: &str = r#"{"total":0,"max_score":null,"hits":[],"categories":{"headlines":{"total":0,"labels":[]},"research":{"total":0,"labels":[]}}}"#;
const MATERIAL: &str = r#"[{"MaterialID":"1234","ContentDate":{"From":"2005-04-20","To":"2015-12-01"},"AccessDate":{"From":"1987-04-20","To":"1990-12-01"}}]"#;

fn assert_compatible(reference: &str, candidate: &str) {
    let compatible = is_compatible(reference, candidate)
        .unwrap_or_else(|error| panic!("Unexpected error: {error}"));
    assert!(
        compatible,
        "{reference} should be compatible with {candidate}"
    );
}

fn assert_incompatible(reference: &str, candidate: &str) {
    let compatible = is_compatible(reference, candidate)
        .unwrap_or_else(|error| panic!("Unexpected error: {error}"));
    assert!(
        !compatible,
        "{reference} should not be compatible with {candidate}"
    );
}

#[test_case(SIMPLE; "simple")]
#[test_case(SEARCH_RESULT; "search result")]
#[test_case(MATERIAL; "top level array")]
#[test_case(r#"{"foo":[], "null": null}"#; "empty array and null")]
#[test_case(r#"[{"a": [[{"b": [true]}]]}, 1, "x"]"#; "deep arrays")]
#[test_case(r#"{"": {"~/": [1.5e10, -3]}}"#; "odd keys")]
fn reflexive(document: &str) {
    assert_compatible(document, document);
}

#[test_case(SIMPLE, r#"{"firstname": "christopher", "lastname": "james", "age": 15}"#; "same structure")]
#[test_case(SIMPLE, r#"{"firstname":"frank", "lastname": "sinatra", "extra field": "blue", "age":70}"#; "superfluous fields")]
#[test_case(
    SIMPLE,
    r#"{"firstname": "Bob", "lastname": "Smith", "age": 25, "favourite-colour": "blue"}"#;
    "extra field at the top level"
)]
#[test_case(r#"{"x": []}"#, r#"{"x": [1,2,3]}"#; "empty array in reference")]
#[test_case(r#"{"max_score":null}"#, r#"{"max_score":10}"#; "null in reference")]
#[test_case(r#"{"x": true}"#, r#"{"x": false}"#; "booleans")]
#[test_case(r#"{"x": 3.14}"#, r#"{"x": 3}"#; "numbers")]
#[test_case(r#"{"foo": ["baz", "bo"]}"#, r#"{"foo": ["bar"]}"#; "simple arrays")]
#[test_case(
    r#"{"hello": [{"x": 1, "y": "a"},{"x": 2, "y": "b"}]}"#,
    r#"{"hello": [{"x": 10, "y": "b"}]}"#;
    "nested structures"
)]
#[test_case(
    SEARCH_RESULT,
    r#"{"total":3,"max_score":1.5,"hits":[{"id":1}],"categories":{"headlines":{"total":1,"labels":["a"]},"research":{"total":2,"labels":["b"],"new":true}},"took":5}"#;
    "search result with data"
)]
fn compatible(reference: &str, candidate: &str) {
    assert_compatible(reference, candidate);
}

#[test_case(SIMPLE, r#"{"foo":"bar"}"#; "different documents")]
#[test_case(r#"{"total":0,"max_score":null}"#, r#"{"total":0}"#; "missing null key")]
#[test_case(r#"{"x": 3.14, "y": "not"}"#, r#"{"x": "three", "y": "not"}"#; "float and string")]
#[test_case(r#"{"x":"y"}"#, r#"{"x":1}"#; "string and number")]
#[test_case(r#"{"x": true}"#, r#"{"x": 1}"#; "boolean and number")]
#[test_case(r#"{"foo": ["baz", "bo"]}"#, r#"{"foo": [1, 2]}"#; "badly typed array")]
#[test_case(r#"{"foo": ["baz", "bo"]}"#, r#"{"foo":"bar"}"#; "array and string")]
#[test_case(r#"{"foo":["bar", "baz"]}"#, r#"{"foo":[]}"#; "empty array in candidate")]
#[test_case(r#"{"hello": [{"x": 1, "y": "a"}]}"#, r#"{"hello": [{"x": 10}]}"#; "missing nested key")]
#[test_case(r#"{"hello": [{"x": 1, "y": "a"}]}"#, r#"{"hello": [{"z": 10}]}"#; "different nested keys")]
#[test_case(r#"{"hello": [{"x": 1, "y": "a"}]}"#, r#"{"hello":[1,2,3]}"#; "object and scalar elements")]
#[test_case(r#"{"a": {"b": 1}}"#, r#"{"a": [{"b": 1}]}"#; "object and array")]
#[test_case(r#"{"a": 1}"#, r#"{"a": null}"#; "null in candidate")]
fn incompatible(reference: &str, candidate: &str) {
    assert_incompatible(reference, candidate);
}

#[test_case("not json", "not json"; "both invalid")]
#[test_case(SIMPLE, "not json"; "invalid candidate")]
#[test_case("nonsense", SIMPLE; "invalid reference")]
#[test_case("42", SIMPLE; "scalar reference")]
#[test_case(SIMPLE, "\"text\""; "scalar candidate")]
#[test_case("[1]", "[2]"; "arrays of numbers")]
#[test_case("[1]", r#"["x"]"#; "arrays of different scalars")]
#[test_case("[null]", "[5]"; "array of null reference")]
#[test_case(SIMPLE, "[null]"; "array of null candidate")]
#[test_case("[[1, 2]]", "[[1, 2]]"; "arrays of arrays")]
#[test_case(SIMPLE, r#"[[{"firstname": "x"}]]"#; "nested array candidate")]
fn invalid_json(reference: &str, candidate: &str) {
    let error = is_compatible(reference, candidate).expect_err("Should be an error");
    assert!(matches!(error.kind(), ErrorKind::InvalidJson(_)));
}

#[test_case("{}", "[]"; "empty candidate")]
#[test_case("[]", "{}"; "empty reference")]
fn empty_array(reference: &str, candidate: &str) {
    let error = is_compatible(reference, candidate).expect_err("Should be an error");
    assert!(matches!(error.kind(), ErrorKind::EmptyArray));
}

/// Adds an extra key to every object in `value`.
fn widen(value: &mut Value) {
    match value {
        Value::Object(object) => {
            for nested in object.values_mut() {
                widen(nested);
            }
            object.insert("__extra__".to_string(), json!({"anything": [1, "two"]}));
        }
        Value::Array(items) => items.iter_mut().for_each(widen),
        _ => {}
    }
}

/// Replaces every leaf in `value` with `null`.
fn nullify(value: &mut Value) {
    match value {
        Value::Object(object) => object.values_mut().for_each(nullify),
        Value::Array(items) => items.iter_mut().for_each(nullify),
        leaf => *leaf = Value::Null,
    }
}

#[test_case(SIMPLE; "simple")]
#[test_case(SEARCH_RESULT; "search result")]
#[test_case(MATERIAL; "material")]
fn superset_stays_compatible(document: &str) {
    let mut candidate: Value = serde_json::from_str(document).expect("Valid JSON");
    widen(&mut candidate);
    let candidate = candidate.to_string();
    assert_compatible(document, &candidate);
    // Only the reference's keys matter, the other direction fails
    assert_incompatible(&candidate, document);
}

#[test_case(SIMPLE; "simple")]
#[test_case(SEARCH_RESULT; "search result")]
#[test_case(MATERIAL; "material")]
fn null_leaves_are_wildcards(document: &str) {
    let mut reference: Value = serde_json::from_str(document).expect("Valid JSON");
    nullify(&mut reference);
    let reference = reference.to_string();
    assert_compatible(&reference, document);
    // Keys are still required
    assert_incompatible(&reference, r#"{"unrelated": 1}"#);
}

#[test]
fn concurrent_callers() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100).all(|_| {
                    is_compatible(SEARCH_RESULT, SEARCH_RESULT).expect("Valid documents")
                })
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("Thread panicked"));
    }
}
