//! Shared world state for category deletion BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::category::adapters::memory::InMemoryCategoryRepository;
use taskboard::category::domain::Category;
use taskboard::category::services::{CategoryCatalogError, CategoryCatalogService};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::domain::Task;
use taskboard::task::services::TaskLifecycleService;
use taskboard::user::adapters::memory::InMemoryUserRepository;
use taskboard::user::domain::User;
use taskboard::user::services::UserDirectoryService;

/// User service type used by the BDD world.
pub type TestUserService = UserDirectoryService<InMemoryUserRepository, DefaultClock>;

/// Category service type used by the BDD world.
pub type TestCategoryService =
    CategoryCatalogService<InMemoryCategoryRepository, InMemoryTaskRepository, DefaultClock>;

/// Task service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryCategoryRepository,
    DefaultClock,
>;

/// Scenario world for category deletion behaviour tests.
pub struct CategoryDeletionWorld {
    pub users: TestUserService,
    pub categories: TestCategoryService,
    pub tasks: TestTaskService,
    pub current_user: Option<User>,
    pub current_category: Option<Category>,
    pub current_task: Option<Task>,
    pub last_deletion_result: Option<Result<(), CategoryCatalogError>>,
}

impl CategoryDeletionWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let category_repository = Arc::new(InMemoryCategoryRepository::new());
        let task_repository = Arc::new(InMemoryTaskRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
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
            current_user: None,
            current_category: None,
            current_task: None,
            last_deletion_result: None,
        }
    }
}

impl Default for CategoryDeletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CategoryDeletionWorld {
    CategoryDeletionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
