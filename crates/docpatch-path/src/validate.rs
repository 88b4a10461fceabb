//! Validation for document paths.

use thiserror::Error;

use crate::Segment;

/// Maximum allowed path depth.
pub const MAX_PATH_DEPTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("INVALID_PATH_SEGMENT")]
    InvalidPathSegment,
    #[error("PATH_TOO_DEEP")]
    PathTooDeep,
}

/// Validate an already-parsed path.
///
/// # Errors
///
/// Returns an error if:
/// - The path exceeds [`MAX_PATH_DEPTH`] segments
/// - Any key segment is the empty string
///
/// # Example
///
/// ```
/// use docpatch_path::{validate_path, key, index};
///
/// validate_path(&[key("foo"), index(0)]).unwrap();
/// validate_path(&[key("")]).unwrap_err();
/// ```
pub fn validate_path(path: &[Segment]) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_DEPTH {
        return Err(ValidationError::PathTooDeep);
    }
    for segment in path {
        if let Segment::Key(k) = segment {
            if k.is_empty() {
                return Err(ValidationError::InvalidPathSegment);
            }
        }
    }
    Ok(())
}
