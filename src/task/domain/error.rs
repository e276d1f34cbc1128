//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing a listing scope from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown listing scope: {0}, expected 'owned' or 'all'")]
pub struct ParseListingScopeError(pub String);
