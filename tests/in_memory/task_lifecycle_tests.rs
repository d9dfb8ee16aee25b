//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Services, wired_services};
use rstest::{fixture, rstest};
use taskboard::category::domain::{Category, CategoryId};
use taskboard::category::services::CreateCategoryRequest;
use taskboard::task::domain::{TaskDomainError, TaskStatus};
use taskboard::task::ports::TaskFilter;
use taskboard::task::services::{CreateTaskRequest, TaskLifecycleError, TransitionTaskRequest};
use taskboard::user::domain::User;
use taskboard::user::services::CreateUserRequest;

#[fixture]
fn services() -> Services {
    wired_services()
}

async fn seeded_references(services: &Services) -> (User, Category) {
    let user = services
        .users
        .create_user(CreateUserRequest::new("Casey Lane", "casey@example.com"))
        .await
        .expect("user creation should succeed");
    let category = services
        .categories
        .create_category(CreateCategoryRequest::new("Errands"))
        .await
        .expect("category creation should succeed");
    (user, category)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_pending_to_completed(services: Services) {
    let (user, category) = seeded_references(&services).await;

    let created = services
        .tasks
        .create_task(CreateTaskRequest::new(
            "File expense report",
            user.id(),
            category.id(),
        ))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Pending);

    let started = services
        .tasks
        .transition_task(TransitionTaskRequest::new(created.id(), "IN_PROGRESS"))
        .await
        .expect("starting the task should succeed");
    assert_eq!(started.status(), TaskStatus::InProgress);

    let completed = services
        .tasks
        .transition_task(TransitionTaskRequest::new(created.id(), "COMPLETED"))
        .await
        .expect("completing the task should succeed");
    assert_eq!(completed.status(), TaskStatus::Completed);

    let reopened = services
        .tasks
        .transition_task(TransitionTaskRequest::new(created.id(), "PENDING"))
        .await;
    assert!(matches!(
        reopened,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStatusTransition {
                from: TaskStatus::Completed,
                to: TaskStatus::Pending,
                ..
            }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_dangling_references(services: Services) {
    let (user, category) = seeded_references(&services).await;

    let unknown_user = services
        .tasks
        .create_task(CreateTaskRequest::new(
            "Orphaned assignee",
            taskboard::user::domain::UserId::new(),
            category.id(),
        ))
        .await;
    assert!(matches!(
        unknown_user,
        Err(TaskLifecycleError::UnknownUser(_))
    ));

    let unknown_category = services
        .tasks
        .create_task(CreateTaskRequest::new(
            "Orphaned category",
            user.id(),
            CategoryId::new(),
        ))
        .await;
    assert!(matches!(
        unknown_category,
        Err(TaskLifecycleError::UnknownCategory(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_filters_by_category_and_assignee(services: Services) {
    let (user, category) = seeded_references(&services).await;
    let other_category = services
        .categories
        .create_category(CreateCategoryRequest::new("Personal"))
        .await
        .expect("category creation should succeed");

    let in_errands = services
        .tasks
        .create_task(CreateTaskRequest::new(
            "Renew passport",
            user.id(),
            category.id(),
        ))
        .await
        .expect("first task creation should succeed");
    services
        .tasks
        .create_task(CreateTaskRequest::new(
            "Plan holiday",
            user.id(),
            other_category.id(),
        ))
        .await
        .expect("second task creation should succeed");

    let filtered = services
        .tasks
        .list_tasks(TaskFilter::new().with_category(category.id()))
        .await
        .expect("listing should succeed");
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered.first().map(taskboard::task::domain::Task::id),
        Some(in_errands.id())
    );

    let by_assignee = services
        .tasks
        .list_tasks(TaskFilter::new().with_assignee(user.id()))
        .await
        .expect("listing should succeed");
    assert_eq!(by_assignee.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_returns_newest_first(services: Services) {
    let (user, category) = seeded_references(&services).await;

    let first = services
        .tasks
        .create_task(CreateTaskRequest::new("Oldest", user.id(), category.id()))
        .await
        .expect("first task creation should succeed");
    let second = services
        .tasks
        .create_task(CreateTaskRequest::new("Newest", user.id(), category.id()))
        .await
        .expect("second task creation should succeed");

    let listed = services
        .tasks
        .list_tasks(TaskFilter::new())
        .await
        .expect("listing should succeed");
    let ids: Vec<_> = listed.iter().map(taskboard::task::domain::Task::id).collect();
    assert_eq!(ids, vec![second.id(), first.id()]);
}
