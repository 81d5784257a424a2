//! Errors raised while turning input text into a comparable node.
use core::fmt;

/// Which of the two compared documents failed to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// The document that defines the required fields (`A`).
    Reference,
    /// The document checked against the reference (`B`).
    Candidate,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Reference => f.write_str("reference"),
            Document::Candidate => f.write_str("candidate"),
        }
    }
}

/// The reason a document could not be normalized.
#[derive(Debug)]
pub enum ErrorKind {
    /// The text is neither a JSON object nor a JSON array of objects.
    InvalidJson(serde_json::Error),
    /// The text is a JSON array without elements, so there is nothing to compare.
    EmptyArray,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidJson(error) => {
                write!(f, "not a JSON object or array of objects: {error}")
            }
            ErrorKind::EmptyArray => {
                f.write_str("an empty array; empty arrays are not suitable for comparison")
            }
        }
    }
}

impl std::error::Error for ErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorKind::InvalidJson(error) => Some(error),
            ErrorKind::EmptyArray => None,
        }
    }
}

/// An error that prevents a compatibility verdict.
///
/// Incompatibility is not an error. This type only appears when one of the inputs
/// cannot be reduced to a single node, in which case compatibility is unknown.
#[derive(Debug)]
pub struct Error {
    document: Document,
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(document: Document, kind: ErrorKind) -> Self {
        Self { document, kind }
    }
    /// The document that failed.
    #[must_use]
    pub fn document(&self) -> Document {
        self.document
    }
    /// Why it failed.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} document is {}", self.document, self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}
