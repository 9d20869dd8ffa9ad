//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The task text is empty after trimming.
    #[error("todo task text must not be empty")]
    EmptyTaskText,
}
