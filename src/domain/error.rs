//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,
}

/// Error returned while parsing owner names from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task owner: {0}")]
pub struct ParseOwnerError(pub String);
