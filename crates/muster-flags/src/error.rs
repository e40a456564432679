//! Error types for named-value and flag sets.

use thiserror::Error;

/// Errors raised when a value or name is not part of a set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The value is not declared in (or representable by) the set.
    #[error("{value} is not a valid value of {set}")]
    InvalidValue { set: &'static str, value: u64 },

    /// The name does not match any declared name of the set.
    #[error("'{name}' does not name a value of {set}")]
    UnknownName { set: &'static str, name: String },
}

/// Result type for set lookups.
pub type Result<T> = std::result::Result<T, SetError>;
