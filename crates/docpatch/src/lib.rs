//! docpatch — immutable structured-document patching with structural sharing.
//!
//! A [`Document`] is a JSON-equivalent nested value whose container children
//! are `Arc`-wrapped. The [`patch`] primitive produces a new document with a
//! single addressed node replaced: every container on the path from the root
//! to the target is freshly allocated, while untouched sibling subtrees are
//! shared by reference with the input. Callers treat each result as a new
//! immutable snapshot; the input is never mutated.
//!
//! Paths are dot-delimited strings parsed by the `docpatch-path` crate into
//! tagged index-or-key segments.
//!
//! # Example
//!
//! ```
//! use docpatch::{parse_path, patch, Document};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let doc = Arc::new(Document::from(json!({"profiles": [{"name": "X"}]})));
//! let path = parse_path("profiles.0.name").unwrap();
//! let next = patch(Some(&doc), &path, Arc::new(Document::from(json!("Z"))));
//!
//! assert_eq!(next.to_value(), json!({"profiles": [{"name": "Z"}]}));
//! assert_eq!(doc.to_value(), json!({"profiles": [{"name": "X"}]}));
//! ```

pub mod document;
pub mod patch;
pub mod state;

pub use document::Document;
pub use patch::{get, patch, try_patch, PatchError, PatchOptions};
pub use state::{DocumentState, StateError};

pub use docpatch_path::{
    format_path, index, key, parse_path, Path, Segment, ValidationError,
};
