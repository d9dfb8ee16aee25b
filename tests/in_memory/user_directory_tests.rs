//! In-memory integration tests for user directory operations.

use super::helpers::{Services, wired_services};
use rstest::{fixture, rstest};
use taskboard::user::ports::UserRepositoryError;
use taskboard::user::services::{CreateUserRequest, UserDirectoryError};

#[fixture]
fn services() -> Services {
    wired_services()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_users_are_listed_newest_first(services: Services) {
    let john = services
        .users
        .create_user(CreateUserRequest::new("John Doe", "john.doe@example.com"))
        .await
        .expect("first creation should succeed");
    let jane = services
        .users
        .create_user(CreateUserRequest::new("Jane Smith", "jane.smith@example.com"))
        .await
        .expect("second creation should succeed");

    let listed = services
        .users
        .list_users()
        .await
        .expect("listing should succeed");
    let ids: Vec<_> = listed.iter().map(taskboard::user::domain::User::id).collect();
    assert_eq!(ids, vec![jane.id(), john.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_is_rejected_across_the_service(services: Services) {
    services
        .users
        .create_user(CreateUserRequest::new("John Doe", "john.doe@example.com"))
        .await
        .expect("first creation should succeed");

    let duplicate = services
        .users
        .create_user(CreateUserRequest::new("Impostor", "JOHN.DOE@example.com"))
        .await;

    assert!(matches!(
        duplicate,
        Err(UserDirectoryError::Repository(
            UserRepositoryError::DuplicateEmail(_)
        ))
    ));
}
