//! When steps for category deletion BDD scenarios.

use super::world::{CategoryDeletionWorld, run_async};
use rstest_bdd_macros::when;

#[when("the category is deleted")]
fn delete_category(world: &mut CategoryDeletionWorld) -> Result<(), eyre::Report> {
    let category = world
        .current_category
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing category in scenario world"))?;

    let result = run_async(world.categories.delete_category(category.id()));
    world.last_deletion_result = Some(result);
    Ok(())
}
