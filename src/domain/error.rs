//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised by tree queries and mutations.
///
/// Lookups never panic on a missing path; they return `NotFound` and calling
/// code is expected to check it explicitly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("item not found: {0}")]
    NotFound(String),

    #[error("item is not a branch: {0}")]
    NotBranch(String),

    #[error("item is not a leaf: {0}")]
    NotLeaf(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
