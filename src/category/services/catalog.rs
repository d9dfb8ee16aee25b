//! Service layer for category creation, update, and guarded deletion.

use crate::category::{
    domain::{Category, CategoryDomainError, CategoryId, CategoryName, deletion_permitted},
    ports::{CategoryRepository, CategoryRepositoryError, TaskCountError, TaskCounter},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    name: String,
    description: Option<String>,
}

impl CreateCategoryRequest {
    /// Creates a request with the required category name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets a free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for a partial category update. Unset fields are left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryRequest {
    category_id: CategoryId,
    name: Option<String>,
    description: Option<String>,
}

impl UpdateCategoryRequest {
    /// Creates an empty update for the given category.
    #[must_use]
    pub const fn new(category_id: CategoryId) -> Self {
        Self {
            category_id,
            name: None,
            description: None,
        }
    }

    /// Sets a replacement display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for category catalog operations.
#[derive(Debug, Error)]
pub enum CategoryCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CategoryDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CategoryRepositoryError),
    /// The referencing-task count could not be obtained.
    #[error(transparent)]
    TaskCount(#[from] TaskCountError),
    /// The referenced category does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),
    /// The category still has referencing tasks and may not be removed.
    #[error("category {category_id} still has {task_count} referencing tasks")]
    CategoryInUse {
        /// Category whose deletion was refused.
        category_id: CategoryId,
        /// Number of tasks referencing it at the time of the check.
        task_count: u64,
    },
}

/// Result type for category catalog service operations.
pub type CategoryCatalogResult<T> = Result<T, CategoryCatalogError>;

/// Category catalog orchestration service.
#[derive(Clone)]
pub struct CategoryCatalogService<R, T, C>
where
    R: CategoryRepository,
    T: TaskCounter,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    task_counter: Arc<T>,
    clock: Arc<C>,
}

impl<R, T, C> CategoryCatalogService<R, T, C>
where
    R: CategoryRepository,
    T: TaskCounter,
    C: Clock + Send + Sync,
{
    /// Creates a new category catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, task_counter: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            repository,
            task_counter,
            clock,
        }
    }

    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryCatalogError`] when the name fails validation or
    /// another category already holds it.
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> CategoryCatalogResult<Category> {
        let name = CategoryName::new(request.name)?;
        let category = Category::new(name, request.description, &*self.clock);
        self.repository.store(&category).await?;
        Ok(category)
    }

    /// Applies a partial update to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryCatalogError::UnknownCategory`] when the category
    /// does not exist, or the usual validation and repository errors
    /// otherwise.
    pub async fn update_category(
        &self,
        request: UpdateCategoryRequest,
    ) -> CategoryCatalogResult<Category> {
        let new_name = request.name.map(CategoryName::new).transpose()?;

        let mut category = self
            .repository
            .find_by_id(request.category_id)
            .await?
            .ok_or(CategoryCatalogError::UnknownCategory(request.category_id))?;

        if let Some(name) = new_name {
            category.rename(name, &*self.clock);
        }
        if let Some(description) = request.description {
            category.set_description(Some(description), &*self.clock);
        }

        self.repository.update(&category).await?;
        Ok(category)
    }

    /// Retrieves a category by identifier.
    ///
    /// Returns `Ok(None)` when the category does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryCatalogError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: CategoryId) -> CategoryCatalogResult<Option<Category>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists all categories, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryCatalogError::Repository`] when the listing fails.
    pub async fn list_categories(&self) -> CategoryCatalogResult<Vec<Category>> {
        Ok(self.repository.list().await?)
    }

    /// Removes a category, provided no task references it.
    ///
    /// The referencing-task count is read through the [`TaskCounter`] port
    /// and fed to the deletion guard; a non-zero count refuses the deletion
    /// and leaves the category untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryCatalogError::UnknownCategory`] when the category
    /// does not exist and [`CategoryCatalogError::CategoryInUse`] when the
    /// guard denies removal.
    pub async fn delete_category(&self, id: CategoryId) -> CategoryCatalogResult<()> {
        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryCatalogError::UnknownCategory(id))?;

        let task_count = self.task_counter.count_for_category(category.id()).await?;
        if !deletion_permitted(task_count) {
            return Err(CategoryCatalogError::CategoryInUse {
                category_id: id,
                task_count,
            });
        }

        match self.repository.delete(id).await {
            Err(CategoryRepositoryError::NotFound(missing)) => {
                Err(CategoryCatalogError::UnknownCategory(missing))
            }
            other => Ok(other?),
        }
    }
}
