//! Repository port for category persistence and lookup.

use crate::category::domain::{Category, CategoryId, CategoryName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for category repository operations.
pub type CategoryRepositoryResult<T> = Result<T, CategoryRepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::DuplicateCategory`] when the
    /// category ID already exists or
    /// [`CategoryRepositoryError::DuplicateName`] when another category
    /// already holds the same normalized name.
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Persists changes to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist, or [`CategoryRepositoryError::DuplicateName`] when the new
    /// name collides with another category.
    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Finds a category by identifier.
    ///
    /// Returns `None` when the category does not exist.
    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>>;

    /// Returns all categories, newest first.
    async fn list(&self) -> CategoryRepositoryResult<Vec<Category>>;

    /// Removes a category.
    ///
    /// The caller is responsible for consulting the deletion guard first;
    /// the repository performs no referencing-task check of its own.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()>;
}

/// Errors returned by category repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryRepositoryError {
    /// A category with the same identifier already exists.
    #[error("duplicate category identifier: {0}")]
    DuplicateCategory(CategoryId),

    /// Another category already holds the same normalized name.
    #[error("category name already exists: {0}")]
    DuplicateName(CategoryName),

    /// The category was not found.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
