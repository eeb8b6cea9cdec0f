//! Error types for resource ID parsing, formatting, and validation.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur when parsing, rendering, or validating resource IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The number of path components differs from the number of segments.
    #[error(
        "ID has {actual} segment(s) but {expected} were expected, the ID should be in the format '{shape}'"
    )]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        shape: String,
    },

    /// A static segment did not match its literal.
    #[error("unexpected segment at position {position}: expected '{expected}', got '{got}'")]
    UnexpectedSegment {
        expected: &'static str,
        got: String,
        position: usize,
    },

    /// A user-specified segment matched an empty path component.
    #[error("segment '{name}' at position {position} cannot be empty")]
    EmptySegment { name: &'static str, position: usize },

    /// A bound value cannot be written as a single path component.
    #[error("value for segment '{name}' at position {position} cannot contain '/'")]
    InvalidValue { name: &'static str, position: usize },

    /// The number of values given differs from the number of user-specified segments.
    #[error("expected {expected} value(s) ({names}), got {actual}")]
    ValueCountMismatch {
        expected: usize,
        actual: usize,
        names: String,
    },

    /// The parsed ID did not populate a segment the identifier type expects.
    #[error("the segment '{name}' was not found in the parsed {id_type} ID")]
    SegmentNotFound {
        name: &'static str,
        id_type: &'static str,
    },

    /// No value was bound for a user-specified segment while rendering.
    #[error("no value was provided for segment '{name}'")]
    MissingValue { name: &'static str },

    /// Two user-specified segments share a name.
    #[error("segment name '{name}' appears more than once in the specification")]
    DuplicateSegmentName { name: &'static str },

    /// A field failed semantic validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IdError {
    /// Returns true if this error came from matching the input against the segment layout.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            IdError::ShapeMismatch { .. }
                | IdError::UnexpectedSegment { .. }
                | IdError::EmptySegment { .. }
                | IdError::InvalidValue { .. }
        )
    }

    /// Returns true if this error means a segment specification and the code using it disagree.
    ///
    /// These are defects in an identifier definition, never bad user input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            IdError::SegmentNotFound { .. }
                | IdError::MissingValue { .. }
                | IdError::DuplicateSegmentName { .. }
        )
    }

    /// Returns the zero-based segment position the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            IdError::UnexpectedSegment { position, .. }
            | IdError::EmptySegment { position, .. }
            | IdError::InvalidValue { position, .. } => Some(*position),
            _ => None,
        }
    }
}
