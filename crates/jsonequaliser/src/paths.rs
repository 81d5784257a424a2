//! Locations of node pairs inside the compared documents.
use core::fmt;
use std::fmt::Write as _;

/// A single step from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSegment<'a> {
    /// Object property name.
    Property(&'a str),
    /// Array index. Arrays are represented by their first element, so this is always `0`
    /// for locations produced during evaluation.
    Index(usize),
}

impl<'a> From<&'a str> for LocationSegment<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        LocationSegment::Property(value)
    }
}

impl From<usize> for LocationSegment<'_> {
    #[inline]
    fn from(value: usize) -> Self {
        LocationSegment::Index(value)
    }
}

/// A location that is only materialized when something asks for it.
///
/// Each recursion level keeps one of these on the stack, pointing to its parent.
#[derive(Debug, Clone)]
pub struct LazyLocation<'a> {
    segment: LocationSegment<'a>,
    parent: Option<&'a LazyLocation<'a>>,
}

impl Default for LazyLocation<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LazyLocation<'a> {
    /// The root of a document.
    #[must_use]
    pub const fn new() -> Self {
        LazyLocation {
            // The root segment is never rendered
            segment: LocationSegment::Index(0),
            parent: None,
        }
    }

    /// A child location one step below `self`.
    #[inline]
    #[must_use]
    pub fn push<'s>(&'s self, segment: impl Into<LocationSegment<'s>>) -> LazyLocation<'s>
    where
        'a: 's,
    {
        LazyLocation {
            segment: segment.into(),
            parent: Some(self),
        }
    }

    fn segments(&self) -> Vec<LocationSegment<'a>> {
        let mut segments = Vec::new();
        let mut current = self;
        while let Some(parent) = current.parent {
            segments.push(current.segment);
            current = parent;
        }
        segments.reverse();
        segments
    }
}

/// A materialized JSON Pointer (RFC 6901) to a node.
///
/// The document root is the empty pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// The pointer as a string slice, empty for the document root.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&LazyLocation<'_>> for Location {
    fn from(value: &LazyLocation<'_>) -> Self {
        let mut buffer = String::new();
        for segment in value.segments() {
            buffer.push('/');
            match segment {
                LocationSegment::Property(name) => write_escaped(&mut buffer, name),
                LocationSegment::Index(idx) => {
                    // Writing into a `String` can't fail
                    let _ = write!(buffer, "{idx}");
                }
            }
        }
        Location(buffer)
    }
}

fn write_escaped(buffer: &mut String, name: &str) {
    for ch in name.chars() {
        match ch {
            '~' => buffer.push_str("~0"),
            '/' => buffer.push_str("~1"),
            _ => buffer.push(ch),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
