//! Existence checks for the user and category references carried by tasks.
//!
//! The task service verifies both references before persisting a task. The
//! user and category repository adapters implement these ports.

use crate::category::domain::CategoryId;
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reference lookups.
pub type ReferenceLookupResult<T> = Result<T, ReferenceLookupError>;

/// Existence check for user references.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Returns `true` when a user with the given identifier exists.
    async fn user_exists(&self, id: UserId) -> ReferenceLookupResult<bool>;
}

/// Existence check for category references.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    /// Returns `true` when a category with the given identifier exists.
    async fn category_exists(&self, id: CategoryId) -> ReferenceLookupResult<bool>;
}

/// Errors returned by reference lookup implementations.
#[derive(Debug, Clone, Error)]
pub enum ReferenceLookupError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReferenceLookupError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
