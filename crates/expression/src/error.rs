//! Standalone error types for the representation boundary.
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use sift_value::ScalarKind;
use thiserror::Error;

/// Result alias for representation-boundary operations.
pub type RepresentationResult<T> = Result<T, RepresentationError>;

/// Errors raised at the value-representation boundary.
///
/// Only one condition here is actually fallible: a raw scalar reaching the
/// strict externalization entry point. That is an evaluator defect, not a
/// data condition — canonicalization and recapture are total and never
/// appear in this enum.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepresentationError {
    /// A scalar leaf escaped evaluation without passing through the
    /// canonicalizer.
    #[error(
        "a raw {kind} scalar should have been represented during evaluation, \
         but escaped as a result"
    )]
    UnrepresentedScalar {
        /// Kind of the offending payload.
        kind: ScalarKind,
    },
}

impl RepresentationError {
    /// Create an unrepresented-scalar defect signal.
    pub fn unrepresented_scalar(kind: ScalarKind) -> Self {
        Self::UnrepresentedScalar { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defect_message_names_the_payload_kind() {
        let err = RepresentationError::unrepresented_scalar(ScalarKind::Integer);
        assert!(err.to_string().contains("integer"));
        assert!(err.to_string().contains("escaped as a result"));
    }
}
