//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::category::adapters::memory::InMemoryCategoryRepository;
use taskboard::category::services::CategoryCatalogService;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::services::TaskLifecycleService;
use taskboard::user::adapters::memory::InMemoryUserRepository;
use taskboard::user::services::UserDirectoryService;

/// User directory service over in-memory storage.
pub type TestUserService = UserDirectoryService<InMemoryUserRepository, DefaultClock>;

/// Category catalog service whose task counts come from the shared in-memory
/// task repository.
pub type TestCategoryService =
    CategoryCatalogService<InMemoryCategoryRepository, InMemoryTaskRepository, DefaultClock>;

/// Task lifecycle service whose reference lookups hit the shared in-memory
/// user and category repositories.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryCategoryRepository,
    DefaultClock,
>;

/// The three services wired over one set of shared repositories.
pub struct Services {
    /// User directory service.
    pub users: TestUserService,
    /// Category catalog service.
    pub categories: TestCategoryService,
    /// Task lifecycle service.
    pub tasks: TestTaskService,
}

/// Builds the full service stack over fresh shared in-memory repositories.
#[must_use]
pub fn wired_services() -> Services {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let category_repository = Arc::new(InMemoryCategoryRepository::new());
    let task_repository = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);

    Services {
        users: UserDirectoryService::new(Arc::clone(&user_repository), Arc::clone(&clock)),
        categories: CategoryCatalogService::new(
            Arc::clone(&category_repository),
            Arc::clone(&task_repository),
            Arc::clone(&clock),
        ),
        tasks: TaskLifecycleService::new(
            task_repository,
            user_repository,
            category_repository,
            clock,
        ),
    }
}
