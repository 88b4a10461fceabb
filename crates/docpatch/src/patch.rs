//! The patch primitive.
//!
//! [`patch`] is a pure transform: given a root document, a path, and a
//! replacement value, it returns a new document in which only the addressed
//! node changed. Containers on the root-to-target path are freshly allocated;
//! everything off that path is shared by reference with the input, which is
//! never mutated. Cost is proportional to path length plus the size of the
//! one rebuilt branch, not to total document size.
//!
//! When a node's container kind disagrees with what the next segment expects
//! (an index segment meeting a mapping, say), the permissive [`patch`]
//! overwrites the node with a fresh container of the expected kind, matching
//! the historical behavior of the admin-form updater this replaces. That
//! discards the old node's contents; [`try_patch`] with
//! [`PatchOptions::strict`] surfaces the mismatch as an error instead.

use docpatch_path::Segment;
use indexmap::IndexMap;
use std::sync::Arc;
use thiserror::Error;

use crate::document::Document;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The container kind at `depth` segments below the root disagrees with
    /// the path segment at that depth.
    #[error("TYPE_MISMATCH at depth {depth}")]
    TypeMismatch { depth: usize },
}

/// Options for [`try_patch`].
#[derive(Debug, Clone, Default)]
pub struct PatchOptions {
    /// If true, a container-kind mismatch along the path is an error.
    /// If false, the mismatched node is overwritten with a fresh container
    /// of the expected kind.
    pub strict: bool,
}

/// Produce a new document with the node at `path` replaced by `value`.
///
/// - An empty path returns `value` itself (whole-document replacement).
/// - An index segment rebuilds a sequence: the existing elements are shared
///   by reference, the addressed slot is patched recursively, and the
///   sequence is extended with `Null` placeholders when the index lies past
///   the current end.
/// - A key segment rebuilds a mapping the same way; existing keys keep their
///   order, a new key is appended.
/// - A missing node (`None`, an out-of-bounds index, an absent key) or a
///   node of the wrong container kind is replaced by a fresh container, so
///   patching builds intermediate containers from nothing.
///
/// # Example
///
/// ```
/// use docpatch::{parse_path, patch, Document};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let path = parse_path("a.b").unwrap();
/// let built = patch(None, &path, Arc::new(Document::from(json!(7))));
/// assert_eq!(built.to_value(), json!({"a": {"b": 7}}));
/// ```
pub fn patch(
    root: Option<&Arc<Document>>,
    path: &[Segment],
    value: Arc<Document>,
) -> Arc<Document> {
    let Some((head, rest)) = path.split_first() else {
        return value;
    };
    match head {
        Segment::Index(i) => {
            let (mut items, child) = match root.map(Arc::as_ref) {
                Some(Document::Array(existing)) => {
                    // Shallow copy: shares every element by reference.
                    (existing.clone(), existing.get(*i).cloned())
                }
                _ => (Vec::new(), None),
            };
            while items.len() <= *i {
                items.push(Arc::new(Document::Null));
            }
            items[*i] = patch(child.as_ref(), rest, value);
            Arc::new(Document::Array(items))
        }
        Segment::Key(k) => {
            let mut map = match root.map(Arc::as_ref) {
                Some(Document::Object(existing)) => existing.clone(),
                _ => IndexMap::new(),
            };
            let child = map.get(k.as_str()).cloned();
            map.insert(k.clone(), patch(child.as_ref(), rest, value));
            Arc::new(Document::Object(map))
        }
    }
}

/// [`patch`] with explicit mismatch handling.
///
/// With `strict` set, the existing document is walked along `path` first and
/// any container-kind mismatch is returned as
/// [`PatchError::TypeMismatch`] before anything is built. Absent nodes and
/// explicit `Null` are not mismatches: replacing them with a fresh container
/// loses no data.
pub fn try_patch(
    root: Option<&Arc<Document>>,
    path: &[Segment],
    value: Arc<Document>,
    options: &PatchOptions,
) -> Result<Arc<Document>, PatchError> {
    if options.strict {
        check_kinds(root.map(Arc::as_ref), path, 0)?;
    }
    Ok(patch(root, path, value))
}

fn check_kinds(
    node: Option<&Document>,
    path: &[Segment],
    depth: usize,
) -> Result<(), PatchError> {
    let Some((head, rest)) = path.split_first() else {
        return Ok(());
    };
    let Some(node) = node else {
        return Ok(());
    };
    match (head, node) {
        (Segment::Index(i), Document::Array(items)) => {
            check_kinds(items.get(*i).map(Arc::as_ref), rest, depth + 1)
        }
        (Segment::Key(k), Document::Object(map)) => {
            check_kinds(map.get(k.as_str()).map(Arc::as_ref), rest, depth + 1)
        }
        (_, Document::Null) => Ok(()),
        _ => Err(PatchError::TypeMismatch { depth }),
    }
}

/// Read the value at `path`, or `None` if the path does not resolve.
///
/// # Example
///
/// ```
/// use docpatch::{get, parse_path, Document};
/// use serde_json::json;
///
/// let doc = Document::from(json!({"a": {"b": [10, 20]}}));
/// let path = parse_path("a.b.1").unwrap();
/// assert_eq!(get(&doc, &path), Some(&Document::from(json!(20))));
/// assert_eq!(get(&doc, &parse_path("a.missing").unwrap()), None);
/// ```
pub fn get<'a>(root: &'a Document, path: &[Segment]) -> Option<&'a Document> {
    let mut current = root;
    for segment in path {
        current = match (segment, current) {
            (Segment::Index(i), Document::Array(items)) => items.get(*i)?.as_ref(),
            (Segment::Key(k), Document::Object(map)) => map.get(k.as_str())?.as_ref(),
            _ => return None,
        };
    }
    Some(current)
}
