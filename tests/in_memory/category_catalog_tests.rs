//! In-memory integration tests for guarded category deletion.

use super::helpers::{Services, wired_services};
use rstest::{fixture, rstest};
use taskboard::category::services::{CategoryCatalogError, CreateCategoryRequest};
use taskboard::task::services::CreateTaskRequest;
use taskboard::user::services::CreateUserRequest;

#[fixture]
fn services() -> Services {
    wired_services()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_is_blocked_while_a_task_references_the_category(services: Services) {
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
    let task = services
        .tasks
        .create_task(CreateTaskRequest::new(
            "Renew passport",
            user.id(),
            category.id(),
        ))
        .await
        .expect("task creation should succeed");

    let blocked = services.categories.delete_category(category.id()).await;
    let Err(CategoryCatalogError::CategoryInUse {
        category_id,
        task_count,
    }) = blocked
    else {
        panic!("expected CategoryInUse, got {blocked:?}");
    };
    assert_eq!(category_id, category.id());
    assert_eq!(task_count, 1);

    // Removing the last referencing task reopens the door.
    services
        .tasks
        .delete_task(task.id())
        .await
        .expect("task deletion should succeed");
    services
        .categories
        .delete_category(category.id())
        .await
        .expect("category deletion should succeed once empty");

    let fetched = services
        .categories
        .find_by_id(category.id())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_succeeds_for_a_category_that_never_had_tasks(services: Services) {
    let category = services
        .categories
        .create_category(CreateCategoryRequest::new("Someday"))
        .await
        .expect("category creation should succeed");

    services
        .categories
        .delete_category(category.id())
        .await
        .expect("deletion should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_in_other_categories_do_not_block_deletion(services: Services) {
    let user = services
        .users
        .create_user(CreateUserRequest::new("Casey Lane", "casey@example.com"))
        .await
        .expect("user creation should succeed");
    let busy = services
        .categories
        .create_category(CreateCategoryRequest::new("Work"))
        .await
        .expect("first category creation should succeed");
    let idle = services
        .categories
        .create_category(CreateCategoryRequest::new("Personal"))
        .await
        .expect("second category creation should succeed");
    services
        .tasks
        .create_task(CreateTaskRequest::new(
            "Quarterly review",
            user.id(),
            busy.id(),
        ))
        .await
        .expect("task creation should succeed");

    services
        .categories
        .delete_category(idle.id())
        .await
        .expect("unreferenced category should delete");

    let blocked = services.categories.delete_category(busy.id()).await;
    assert!(matches!(
        blocked,
        Err(CategoryCatalogError::CategoryInUse { task_count: 1, .. })
    ));
}
