//! Error type for manager operations.

use thiserror::Error;

use muster_query::{CompareError, CriterionError};

/// Errors surfaced by [`Manager`](crate::Manager) operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// No item occupies the requested index.
    #[error("no item at index {0}")]
    NotFound(usize),

    /// The item to remove is not present in the collection.
    #[error("item is not present in the collection")]
    ItemNotFound,

    /// A search or filter produced no results.
    #[error("search produced no results")]
    NoResults,

    /// Criterion construction failed validation.
    #[error(transparent)]
    Criterion(#[from] CriterionError),

    /// Criterion evaluation failed during a search.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// The manager's external source could not be loaded.
    #[error("failed to load collection")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),
}
