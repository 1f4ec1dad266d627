use thiserror::Error;

use crate::engine::{tree::node::OperationId, value::tag::Tag};

/// Represents all errors that can occur while evaluating or checking an
/// operation tree.
///
/// Tag mismatches come in two variants. `TagMismatch` reports one operand
/// outside the category a function accepts. `NotComparable` reports two
/// operands that are each acceptable but outside each other's comparability
/// class, and carries both tags. Use [`EvalError::is_tag_mismatch`] to match
/// either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A conversion or operator received an operand whose tag lies outside
    /// the set it accepts.
    #[error("Tag mismatch in '{function}': expected {expected}, found {found}.")]
    TagMismatch {
        /// Name of the conversion or operator that rejected the operand.
        function: &'static str,
        /// Description of the accepted tags.
        expected: &'static str,
        /// The tag that was actually supplied.
        found:    Tag,
    },
    /// Two operands were individually valid but not comparable with each
    /// other.
    #[error("Tag mismatch in '{function}': {left} and {right} are not comparable.")]
    NotComparable {
        /// Name of the operator that rejected the operands.
        function: &'static str,
        /// Tag of the left operand.
        left:     Tag,
        /// Tag of the right operand.
        right:    Tag,
    },
    /// A node's children form a combination the entry point cannot handle.
    #[error("Structural mismatch: {details}.")]
    StructuralMismatch {
        /// Details about the offending node.
        details: String,
    },
    /// A node references an operation id that the operator table does not
    /// contain.
    #[error("Unknown operation id {id}.")]
    UnknownOperation {
        /// The missing id.
        id: OperationId,
    },
    /// The tree is nested deeper than the evaluator was configured to allow.
    #[error("Tree depth exceeds the configured limit of {limit}.")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl EvalError {
    /// Returns `true` for both tag mismatch variants.
    ///
    /// # Example
    /// ```
    /// use opertree::{engine::value::tag::Tag, error::EvalError};
    ///
    /// let err = EvalError::NotComparable { function: "isEqual",
    ///                                      left:     Tag::Number,
    ///                                      right:    Tag::String, };
    /// assert!(err.is_tag_mismatch());
    /// ```
    #[must_use]
    pub const fn is_tag_mismatch(&self) -> bool {
        matches!(self, Self::TagMismatch { .. } | Self::NotComparable { .. })
    }
}
