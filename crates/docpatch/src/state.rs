//! Single-writer holder for the current document.
//!
//! An edit surface (an admin form, say) owns one [`DocumentState`] and turns
//! each discrete user edit into one [`DocumentState::apply`] call; [`patch`]
//! is the only mutation primitive involved. Readers take cheap [`snapshot`]
//! handles that stay valid across later edits.
//!
//! Atomicity across concurrent edit sources is the caller's concern: the
//! container is threaded by `&mut`, so the borrow checker already enforces a
//! single writer within one thread of control.
//!
//! [`snapshot`]: DocumentState::snapshot

use docpatch_path::{parse_path, Segment, ValidationError};
use std::sync::Arc;
use thiserror::Error;

use crate::document::Document;
use crate::patch::{get, patch, try_patch, PatchError, PatchOptions};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error(transparent)]
    Path(#[from] ValidationError),
    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// The current document, advanced one patch at a time.
#[derive(Debug, Clone)]
pub struct DocumentState {
    current: Arc<Document>,
}

impl DocumentState {
    pub fn new(initial: Document) -> Self {
        Self {
            current: Arc::new(initial),
        }
    }

    /// A state holding `Null`, for forms that build their document from
    /// nothing.
    pub fn empty() -> Self {
        Self::new(Document::Null)
    }

    /// A cheap handle to the current immutable document.
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.current)
    }

    /// Read the value at `path` in the current document.
    pub fn get(&self, path: &[Segment]) -> Option<&Document> {
        get(&self.current, path)
    }

    /// Apply one edit: replace the node at `path` with `value` and make the
    /// result the new current document.
    pub fn apply(&mut self, path: &[Segment], value: Document) {
        self.current = patch(Some(&self.current), path, Arc::new(value));
    }

    /// Like [`apply`], but a container-kind mismatch along the path leaves
    /// the state unchanged and returns the error.
    ///
    /// [`apply`]: DocumentState::apply
    pub fn apply_strict(
        &mut self,
        path: &[Segment],
        value: Document,
    ) -> Result<(), PatchError> {
        self.current = try_patch(
            Some(&self.current),
            path,
            Arc::new(value),
            &PatchOptions { strict: true },
        )?;
        Ok(())
    }

    /// Convenience: parse a dotted path and apply.
    pub fn set(&mut self, dotted: &str, value: Document) -> Result<(), StateError> {
        let path = parse_path(dotted)?;
        self.apply(&path, value);
        Ok(())
    }

    /// Swap in a whole new document (the empty-path case).
    pub fn replace(&mut self, doc: Document) {
        self.current = Arc::new(doc);
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::empty()
    }
}
