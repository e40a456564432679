//! Error types for criterion construction and evaluation.

use thiserror::Error;

/// Errors raised while validating and building a criterion.
#[derive(Debug, Error)]
pub enum CriterionError {
    /// The field is not declared in the manager's field table.
    #[error("unknown search field '{field}'")]
    UnknownField { field: String },

    /// The operator is outside the field's operator-set class.
    #[error("operator '{op}' is not permitted for field '{field}'")]
    OperatorNotAllowed {
        op: &'static str,
        field: &'static str,
    },

    /// The operand kind does not match what the field's class compares.
    #[error("field '{field}' compares {expected} operands, got {actual}")]
    OperandMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The wildcard operand did not compile to a pattern.
    #[error("invalid wildcard pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors raised while evaluating a criterion against an item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// The item has no value for the criterion's field.
    #[error("item has no value for field '{field}'")]
    MissingField { field: String },

    /// The operator was applied to an operand kind it cannot compare.
    #[error("operator '{op}' requires {expected} operands")]
    InvalidOperand {
        op: &'static str,
        expected: &'static str,
    },

    /// A custom operator reached the standard comparison path.
    #[error("operator '{token}' has no standard comparison")]
    UnsupportedOperator { token: &'static str },
}
