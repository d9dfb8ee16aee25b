//! Referencing-task count for the category deletion guard.
//!
//! The catalog service obtains the count through this port and feeds it to
//! [`deletion_permitted`](crate::category::domain::deletion_permitted). The
//! task repository adapters implement it.

use crate::category::domain::CategoryId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for referencing-task counts.
pub type TaskCountResult<T> = Result<T, TaskCountError>;

/// Count of tasks referencing a category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskCounter: Send + Sync {
    /// Returns how many tasks currently reference the given category.
    async fn count_for_category(&self, id: CategoryId) -> TaskCountResult<u64>;
}

/// Errors returned by task counter implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskCountError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskCountError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
