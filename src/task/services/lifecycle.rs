//! Service layer for task creation, update, transition, and retrieval.

use crate::category::domain::CategoryId;
use crate::task::{
    domain::{
        ParseTaskPriorityError, ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::{
        CategoryLookup, ReferenceLookupError, TaskFilter, TaskRepository, TaskRepositoryError,
        UserLookup,
    },
};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    assignee: UserId,
    category: CategoryId,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    ///
    /// The new task starts in [`TaskStatus::Pending`]; there is no way to
    /// create a task in any other status.
    #[must_use]
    pub fn new(title: impl Into<String>, assignee: UserId, category: CategoryId) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            assignee,
            category,
        }
    }

    /// Sets a free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority from its wire form, e.g. `"HIGH"`. Defaults to
    /// `"MEDIUM"` when unset.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Request payload for moving a task to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    target_status: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request with the target status in wire form,
    /// e.g. `"IN_PROGRESS"`.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
        }
    }
}

/// Request payload for a partial task update. Unset fields are left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    assignee: Option<UserId>,
    category: Option<CategoryId>,
}

impl UpdateTaskRequest {
    /// Creates an empty update for the given task.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
            priority: None,
            status: None,
            assignee: None,
            category: None,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement priority in wire form.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Requests a status transition as part of the update, in wire form.
    /// The transition rule applies exactly as it does for
    /// [`TaskLifecycleService::transition_task`].
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a replacement assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets a replacement category.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// A reference lookup failed.
    #[error(transparent)]
    Lookup(#[from] ReferenceLookupError),
    /// The requested status is not a known status value.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The requested priority is not a known priority value.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),
    /// The referenced task does not exist.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),
    /// The referenced user does not exist.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
    /// The referenced category does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, U, G, C>
where
    R: TaskRepository,
    U: UserLookup,
    G: CategoryLookup,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    users: Arc<U>,
    categories: Arc<G>,
    clock: Arc<C>,
}

impl<R, U, G, C> TaskLifecycleService<R, U, G, C>
where
    R: TaskRepository,
    U: UserLookup,
    G: CategoryLookup,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, users: Arc<U>, categories: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            users,
            categories,
            clock,
        }
    }

    /// Creates a new task in [`TaskStatus::Pending`].
    ///
    /// Both the assignee and the category must exist before the task is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownUser`] or
    /// [`TaskLifecycleError::UnknownCategory`] when a reference is dangling,
    /// and the usual validation and repository errors otherwise.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let priority = request
            .priority
            .as_deref()
            .map(TaskPriority::try_from)
            .transpose()?
            .unwrap_or_default();

        self.ensure_user_exists(request.assignee).await?;
        self.ensure_category_exists(request.category).await?;

        let task = Task::new(
            title,
            request.description,
            priority,
            request.assignee,
            request.category,
            &*self.clock,
        );
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Moves a task to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] when the target is not
    /// a known status value, [`TaskLifecycleError::UnknownTask`] when the
    /// task does not exist, and
    /// [`TaskDomainError::InvalidStatusTransition`] (wrapped in
    /// [`TaskLifecycleError::Domain`]) when the transition rule denies the
    /// move.
    pub async fn transition_task(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.target_status.as_str())?;

        let mut task = self
            .repository
            .find_by_id(request.task_id)
            .await?
            .ok_or(TaskLifecycleError::UnknownTask(request.task_id))?;

        task.transition_to(target, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// The update is all-or-nothing: when any part fails — including a
    /// denied status transition — nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::create_task`] and
    /// [`Self::transition_task`] for the corresponding fields, plus
    /// [`TaskLifecycleError::UnknownTask`] when the task does not exist.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        // Parse and validate up front so malformed input rejects before any
        // lookup or mutation.
        let new_title = request.title.map(TaskTitle::new).transpose()?;
        let new_priority = request
            .priority
            .as_deref()
            .map(TaskPriority::try_from)
            .transpose()?;
        let new_status = request
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?;

        let mut task = self
            .repository
            .find_by_id(request.task_id)
            .await?
            .ok_or(TaskLifecycleError::UnknownTask(request.task_id))?;

        if let Some(assignee) = request.assignee {
            self.ensure_user_exists(assignee).await?;
            task.reassign(assignee, &*self.clock);
        }
        if let Some(category) = request.category {
            self.ensure_category_exists(category).await?;
            task.recategorize(category, &*self.clock);
        }
        if let Some(title) = new_title {
            task.rename(title, &*self.clock);
        }
        if let Some(description) = request.description {
            task.set_description(Some(description), &*self.clock);
        }
        if let Some(priority) = new_priority {
            task.set_priority(priority, &*self.clock);
        }
        if let Some(status) = new_status {
            task.transition_to(status, &*self.clock)?;
        }

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists tasks satisfying the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list_tasks(&self, filter: TaskFilter) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_matching(filter).await?)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] when the task does not
    /// exist.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        match self.repository.delete(id).await {
            Err(TaskRepositoryError::NotFound(missing)) => {
                Err(TaskLifecycleError::UnknownTask(missing))
            }
            other => Ok(other?),
        }
    }

    async fn ensure_user_exists(&self, id: UserId) -> TaskLifecycleResult<()> {
        if self.users.user_exists(id).await? {
            Ok(())
        } else {
            Err(TaskLifecycleError::UnknownUser(id))
        }
    }

    async fn ensure_category_exists(&self, id: CategoryId) -> TaskLifecycleResult<()> {
        if self.categories.category_exists(id).await? {
            Ok(())
        } else {
            Err(TaskLifecycleError::UnknownCategory(id))
        }
    }
}
