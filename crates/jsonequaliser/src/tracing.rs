use crate::paths::{LazyLocation, Location};

/// Context information passed to tracing callbacks during evaluation.
///
/// The callback receives one context per evaluated node pair, after the pair has been
/// decided. Children are reported before their parents.
#[derive(Debug, Clone)]
pub struct TracingContext<'a, 'b> {
    /// The location of the node pair, identical in both documents
    pub location: &'b LazyLocation<'a>,
    /// The result of evaluating this node pair
    pub result: NodeEvaluationResult,
}

impl<'a, 'b> TracingContext<'a, 'b> {
    /// Create a new tracing context
    pub fn new(location: &'b LazyLocation<'a>, result: impl Into<NodeEvaluationResult>) -> Self {
        Self {
            location,
            result: result.into(),
        }
    }

    /// Materialize the location of this node pair.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location.into()
    }

    /// Call the tracing callback with this context
    pub fn call(self, callback: TracingCallback<'_>) {
        callback(self);
    }
}

/// Result of evaluating a node pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEvaluationResult {
    /// The candidate node satisfies the reference node
    Compatible,
    /// The candidate node is missing or has a different kind
    Incompatible,
    /// The reference node is `null` and imposes no kind constraint
    Ignored,
}

impl From<bool> for NodeEvaluationResult {
    fn from(value: bool) -> Self {
        if value {
            Self::Compatible
        } else {
            Self::Incompatible
        }
    }
}

/// Type alias for tracing callbacks.
///
/// A tracing callback is called for each node pair visited by the evaluator,
/// providing visibility into why a verdict was reached.
pub type TracingCallback<'a> = &'a mut dyn FnMut(TracingContext);
