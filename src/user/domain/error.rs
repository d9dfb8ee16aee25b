//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyUserName,

    /// The user name exceeds the persisted column width.
    #[error("user name exceeds {limit} characters")]
    UserNameTooLong {
        /// Maximum accepted length.
        limit: usize,
    },

    /// The email address does not have a plausible shape.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
