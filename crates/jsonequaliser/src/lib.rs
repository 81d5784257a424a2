//! # jsonequaliser
//!
//! Check whether a JSON document is *shape-compatible* with a reference document.
//!
//! A candidate document is compatible with a reference document when every field the
//! reference declares exists in the candidate with a value of the same kind. The candidate
//! may carry extra fields, and values themselves are never compared. This makes it a cheap
//! contract check: record an example payload a consumer relies on, then verify that a
//! producer's current output still satisfies it.
//!
//! ```rust
//! let reference = r#"{"firstname": "chris", "lastname": "james", "age": 30}"#;
//! let candidate = r#"{"firstname": "Bob", "lastname": "Smith", "age": 25, "favourite-colour": "blue"}"#;
//!
//! assert!(jsonequaliser::is_compatible(reference, candidate)?);
//! assert!(!jsonequaliser::is_compatible(reference, r#"{"firstname": "Bob"}"#)?);
//! # Ok::<(), jsonequaliser::Error>(())
//! ```
//!
//! ## Rules
//!
//! - A top-level array is represented by its first element, which must be an object. An
//!   empty top-level array is an error, there is nothing to compare.
//! - `null` in the reference accepts a value of any kind, but the key must still be present.
//! - Nested arrays are also represented by their first element. An empty reference array
//!   accepts any array, an empty candidate array does not satisfy a non-empty reference array.
//! - Booleans, numbers and strings only need to match in kind. Integers and floats are both
//!   numbers.
//!
//! ## Tracing
//!
//! [`is_compatible_with_tracing`] reports every evaluated node pair, which is handy to find
//! out *where* two documents diverge:
//!
//! ```rust
//! use jsonequaliser::{Location, NodeEvaluationResult};
//!
//! let mut failures = Vec::new();
//! let compatible = jsonequaliser::is_compatible_with_tracing(
//!     r#"{"hits": [{"title": "x"}]}"#,
//!     r#"{"hits": [{"title": 42}]}"#,
//!     &mut |ctx| {
//!         if ctx.result == NodeEvaluationResult::Incompatible {
//!             failures.push(Location::from(ctx.location).to_string());
//!         }
//!     },
//! )?;
//! assert!(!compatible);
//! assert_eq!(failures, ["/hits/0/title", "/hits/0", "/hits", ""]);
//! # Ok::<(), jsonequaliser::Error>(())
//! ```
mod compatibility;
mod error;
mod normalize;
pub mod paths;
mod tracing;

pub use compatibility::{is_compatible_values, is_compatible_values_with_tracing};
pub use error::{Document, Error, ErrorKind};
pub use normalize::normalize;
pub use paths::{LazyLocation, Location};
pub use tracing::{NodeEvaluationResult, TracingCallback, TracingContext};

use serde_json::Value;

fn normalize_both(reference: &str, candidate: &str) -> Result<(Value, Value), Error> {
    let reference = normalize(reference).map_err(|kind| Error::new(Document::Reference, kind))?;
    let candidate = normalize(candidate).map_err(|kind| Error::new(Document::Candidate, kind))?;
    Ok((reference, candidate))
}

/// Check whether `candidate` satisfies the field and kind contract of `reference`.
///
/// Both inputs are JSON texts holding either an object or a non-empty array of objects.
/// Arrays are represented by their first element.
///
/// # Errors
///
/// Returns an error if either document is not a JSON object or array of objects, or is an
/// empty array.
/// The reference document is checked first. An incompatible candidate is not an error.
pub fn is_compatible(reference: &str, candidate: &str) -> Result<bool, Error> {
    let (reference, candidate) = normalize_both(reference, candidate)?;
    Ok(is_compatible_values(&reference, &candidate))
}

/// Same as [`is_compatible`], reporting every evaluated node pair to `callback`.
///
/// Nothing is reported when one of the documents fails to normalize.
///
/// # Errors
///
/// See [`is_compatible`].
pub fn is_compatible_with_tracing(
    reference: &str,
    candidate: &str,
    callback: TracingCallback<'_>,
) -> Result<bool, Error> {
    let (reference, candidate) = normalize_both(reference, candidate)?;
    Ok(is_compatible_values_with_tracing(&reference, &candidate, callback))
}
