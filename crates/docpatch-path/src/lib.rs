//! Dotted-path utilities.
//!
//! A path addresses a node inside a structured document. Paths are written as
//! dot-delimited strings (e.g. `"profiles.2.contacts.email"`) and parsed into
//! a sequence of tagged [`Segment`]s: a segment that consists solely of ASCII
//! digits is an array index, anything else is an object key. The tagging
//! happens once, at parse time, so consumers never have to re-infer what a
//! segment means.
//!
//! # Example
//!
//! ```
//! use docpatch_path::{parse_path, format_path, Segment};
//!
//! let path = parse_path("profiles.2.email").unwrap();
//! assert_eq!(path, vec![
//!     Segment::Key("profiles".to_string()),
//!     Segment::Index(2),
//!     Segment::Key("email".to_string()),
//! ]);
//!
//! assert_eq!(format_path(&path), "profiles.2.email");
//! ```

use std::fmt;

pub mod validate;
pub use validate::{validate_path, ValidationError, MAX_PATH_DEPTH};

/// A single step in a document path.
///
/// Decided once when the path is parsed: a numeric segment selects into a
/// sequence, any other string selects into a mapping. Callers that need a
/// numeric-looking *key* (e.g. the object key `"2024"`) construct the segment
/// with [`key`] instead of going through [`parse_path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Selects element `n` of a sequence.
    Index(usize),
    /// Selects the value under a string key of a mapping.
    Key(String),
}

/// An ordered sequence of segments addressing a node. Empty means the root.
pub type Path = Vec<Segment>;

impl Segment {
    /// Returns the index if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(i) => Some(*i),
            Segment::Key(_) => None,
        }
    }

    /// Returns the key if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(k) => Some(k),
            Segment::Index(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(i) => write!(f, "{i}"),
            Segment::Key(k) => f.write_str(k),
        }
    }
}

/// Force a string to be a key segment, even if it looks numeric.
pub fn key(k: impl Into<String>) -> Segment {
    Segment::Key(k.into())
}

/// Construct an index segment.
pub fn index(i: usize) -> Segment {
    Segment::Index(i)
}

/// Check whether a segment string parses fully as a base-10 non-negative
/// integer array index.
///
/// Leading zeros are accepted (`"007"` is index 7); signs, fractions, and the
/// empty string are not.
///
/// # Example
///
/// ```
/// use docpatch_path::is_index_segment;
///
/// assert!(is_index_segment("0"));
/// assert!(is_index_segment("123"));
/// assert!(is_index_segment("007"));
/// assert!(!is_index_segment("-1"));
/// assert!(!is_index_segment("1.5"));
/// assert!(!is_index_segment("abc"));
/// assert!(!is_index_segment(""));
/// ```
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a single segment string into a tagged [`Segment`].
///
/// Empty segments are rejected rather than coerced: a path like `"a..b"` is
/// almost always a caller bug and silently producing an empty key would hide
/// it.
pub fn parse_segment(segment: &str) -> Result<Segment, ValidationError> {
    if segment.is_empty() {
        return Err(ValidationError::InvalidPathSegment);
    }
    if is_index_segment(segment) {
        // Digits-only strings longer than usize still tag as keys rather
        // than panicking; such indexes are unrepresentable anyway.
        if let Ok(i) = segment.parse::<usize>() {
            return Ok(Segment::Index(i));
        }
    }
    Ok(Segment::Key(segment.to_string()))
}

/// Parse a dot-delimited path string into segments.
///
/// The empty string is the root path (empty vec). Each segment is tagged as
/// [`Segment::Index`] or [`Segment::Key`] per [`is_index_segment`].
///
/// # Errors
///
/// - [`ValidationError::InvalidPathSegment`] for any empty segment
///   (leading dot, trailing dot, or `..`).
/// - [`ValidationError::PathTooDeep`] when the path exceeds
///   [`MAX_PATH_DEPTH`] segments.
///
/// # Example
///
/// ```
/// use docpatch_path::{parse_path, Segment};
///
/// assert_eq!(parse_path("").unwrap(), Vec::<Segment>::new());
/// assert_eq!(
///     parse_path("items.0").unwrap(),
///     vec![Segment::Key("items".into()), Segment::Index(0)],
/// );
/// assert!(parse_path("a..b").is_err());
/// assert!(parse_path(".a").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Path, ValidationError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    let segments: Vec<Segment> = path
        .split('.')
        .map(parse_segment)
        .collect::<Result<_, _>>()?;
    validate_path(&segments)?;
    Ok(segments)
}

/// Format segments back into a dot-delimited path string.
///
/// Inverse of [`parse_path`] for any path it accepts. Key segments that
/// themselves contain a `.` have no dotted-string form; formatting them
/// produces a string that will not round-trip.
///
/// # Example
///
/// ```
/// use docpatch_path::{format_path, index, key};
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&[key("items"), index(3)]), "items.3");
/// ```
pub fn format_path(path: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&segment.to_string());
    }
    out
}

/// Check if a path addresses the root node.
pub fn is_root(path: &[Segment]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a proper ancestor of `child`.
///
/// # Example
///
/// ```
/// use docpatch_path::{is_ancestor, key, index};
///
/// let parent = vec![key("profiles")];
/// let child = vec![key("profiles"), index(0)];
/// assert!(is_ancestor(&parent, &child));
/// assert!(!is_ancestor(&child, &parent));
/// assert!(!is_ancestor(&parent, &parent));
/// ```
pub fn is_ancestor(parent: &[Segment], child: &[Segment]) -> bool {
    parent.len() < child.len() && parent == &child[..parent.len()]
}

/// Get the parent path of a given path, or `None` for the root.
pub fn parent(path: &[Segment]) -> Option<&[Segment]> {
    if path.is_empty() {
        return None;
    }
    Some(&path[..path.len() - 1])
}
