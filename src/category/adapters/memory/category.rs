//! In-memory repository for category tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::category::{
    domain::{Category, CategoryId},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};
use crate::task::ports::{CategoryLookup, ReferenceLookupError, ReferenceLookupResult};

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<InMemoryCategoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryCategoryState {
    categories: HashMap<CategoryId, Category>,
    name_index: HashMap<String, CategoryId>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, InMemoryCategoryState>, CategoryRepositoryError>
    {
        self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, InMemoryCategoryState>, CategoryRepositoryError>
    {
        self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.write_state()?;
        if state.categories.contains_key(&category.id()) {
            return Err(CategoryRepositoryError::DuplicateCategory(category.id()));
        }

        let key = category.name().normalized();
        if state.name_index.contains_key(&key) {
            return Err(CategoryRepositoryError::DuplicateName(
                category.name().clone(),
            ));
        }

        state.name_index.insert(key, category.id());
        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.write_state()?;
        let old_category = state
            .categories
            .get(&category.id())
            .ok_or(CategoryRepositoryError::NotFound(category.id()))?
            .clone();

        let key = category.name().normalized();
        let name_taken = state
            .name_index
            .get(&key)
            .is_some_and(|holder| *holder != category.id());
        if name_taken {
            return Err(CategoryRepositoryError::DuplicateName(
                category.name().clone(),
            ));
        }

        state.name_index.remove(&old_category.name().normalized());
        state.name_index.insert(key, category.id());
        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.read_state()?;
        Ok(state.categories.get(&id).cloned())
    }

    async fn list(&self) -> CategoryRepositoryResult<Vec<Category>> {
        let state = self.read_state()?;
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        categories.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().into_inner().cmp(&a.id().into_inner()))
        });
        Ok(categories)
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        let mut state = self.write_state()?;
        let removed = state
            .categories
            .remove(&id)
            .ok_or(CategoryRepositoryError::NotFound(id))?;
        state.name_index.remove(&removed.name().normalized());
        Ok(())
    }
}

#[async_trait]
impl CategoryLookup for InMemoryCategoryRepository {
    async fn category_exists(&self, id: CategoryId) -> ReferenceLookupResult<bool> {
        let state = self.state.read().map_err(|err| {
            ReferenceLookupError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.categories.contains_key(&id))
    }
}
