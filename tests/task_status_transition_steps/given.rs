//! Given steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::category::services::CreateCategoryRequest;
use taskboard::task::services::{CreateTaskRequest, TransitionTaskRequest};
use taskboard::user::services::CreateUserRequest;

#[given(r#"a registered user "{email}""#)]
fn registered_user(world: &mut TaskTransitionWorld, email: String) -> Result<(), eyre::Report> {
    let user = run_async(
        world
            .users
            .create_user(CreateUserRequest::new("Casey Lane", email)),
    )
    .wrap_err("create user for transition scenario")?;
    world.current_user = Some(user);
    Ok(())
}

#[given(r#"a category named "{name}""#)]
fn category_named(world: &mut TaskTransitionWorld, name: String) -> Result<(), eyre::Report> {
    let category = run_async(
        world
            .categories
            .create_category(CreateCategoryRequest::new(name)),
    )
    .wrap_err("create category for transition scenario")?;
    world.current_category = Some(category);
    Ok(())
}

#[given(r#"a pending task titled "{title}""#)]
fn pending_task_titled(world: &mut TaskTransitionWorld, title: String) -> Result<(), eyre::Report> {
    let user = world
        .current_user
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registered user in scenario world"))?;
    let category = world
        .current_category
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing category in scenario world"))?;

    let task = run_async(world.tasks.create_task(CreateTaskRequest::new(
        title,
        user.id(),
        category.id(),
    )))
    .wrap_err("create task for transition scenario")?;
    world.current_task = Some(task);
    Ok(())
}

#[given(r#"the task has been transitioned to "{status}""#)]
fn task_has_been_transitioned(
    world: &mut TaskTransitionWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let transitioned = run_async(
        world
            .tasks
            .transition_task(TransitionTaskRequest::new(task.id(), status)),
    )
    .wrap_err("transition task in scenario setup")?;
    world.current_task = Some(transitioned);
    Ok(())
}
