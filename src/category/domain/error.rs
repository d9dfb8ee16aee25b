//! Error types for category domain validation.

use thiserror::Error;

/// Errors returned while constructing domain category values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryDomainError {
    /// The category name is empty after whitespace cleanup.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// The category name exceeds the persisted column width.
    #[error("category name exceeds {limit} characters")]
    CategoryNameTooLong {
        /// Maximum accepted length.
        limit: usize,
    },
}
