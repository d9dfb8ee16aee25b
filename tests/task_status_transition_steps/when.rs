//! When steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::TransitionTaskRequest;

#[when(r#"the task is transitioned to "{status}""#)]
fn transition_task(world: &mut TaskTransitionWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let result = run_async(
        world
            .tasks
            .transition_task(TransitionTaskRequest::new(task.id(), status)),
    );
    if let Ok(ref updated) = result {
        world.current_task = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}
