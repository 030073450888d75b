//! Then steps for drag-and-drop BDD scenarios.

use super::world::{DragDropWorld, run_async};
use rstest_bdd_macros::then;
use serde_json::Value;
use taskboard::board::domain::{DropOutcome, ItemId, ListId, Status};

fn last_outcome(world: &DragDropWorld) -> Result<&DropOutcome, eyre::Report> {
    world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop outcome"))
}

#[then("the drop is committed")]
fn drop_committed(world: &DragDropWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        *outcome == DropOutcome::Committed,
        "expected a committed drop, got {outcome:?}"
    );
    Ok(())
}

#[then("the drop only repositions the card")]
fn drop_repositioned(world: &DragDropWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        *outcome == DropOutcome::Repositioned,
        "expected a reposition, got {outcome:?}"
    );
    Ok(())
}

#[then("the drop is reverted")]
fn drop_reverted(world: &DragDropWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        matches!(outcome, DropOutcome::Reverted(_)),
        "expected a reverted drop, got {outcome:?}"
    );
    Ok(())
}

#[then(r#"the stored status of task {id:u64} is "{status}""#)]
fn stored_status_is(world: &DragDropWorld, id: u64, status: String) -> Result<(), eyre::Report> {
    let config = world.config()?;
    let list_id = ListId::new(config.tasks_list_id.clone().unwrap_or_default())?;
    let field = config.status_field_name.as_deref().unwrap_or_default();
    let record = world
        .store
        .item(&list_id, ItemId::new(id))?
        .ok_or_else(|| eyre::eyre!("task {id} missing from store"))?;
    let stored = record.get(field).and_then(Value::as_str);
    eyre::ensure!(
        stored == Some(status.as_str()),
        "expected stored status {status}, found {stored:?}"
    );
    Ok(())
}

#[then(r#"task {id:u64} is shown in "{status}""#)]
fn task_shown_in(world: &DragDropWorld, id: u64, status: String) -> Result<(), eyre::Report> {
    let placement = world.surface.placement(ItemId::new(id));
    eyre::ensure!(
        placement == Some(Status::new(status.as_str())),
        "expected task {id} in {status}, found {placement:?}"
    );
    Ok(())
}

#[then(r#"the "{status}" column holds {count:usize} tasks after a re-render"#)]
fn column_holds_after_rerender(
    world: &DragDropWorld,
    status: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let outcome = run_async(world.pipeline.render(world.config()?));
    let snapshot = outcome
        .snapshot()
        .ok_or_else(|| eyre::eyre!("re-render failed: {outcome:?}"))?;
    let column = snapshot
        .columns
        .iter()
        .find(|column| column.status.as_str() == status)
        .ok_or_else(|| eyre::eyre!("column {status} missing"))?;
    eyre::ensure!(
        column.tasks.len() == count,
        "expected {count} tasks in {status}, found {}",
        column.tasks.len()
    );
    Ok(())
}

#[then("no status was written to the store")]
fn no_status_written(world: &DragDropWorld) -> Result<(), eyre::Report> {
    let updates = world.store.updates()?;
    eyre::ensure!(updates.is_empty(), "expected no writes, found {updates:?}");
    Ok(())
}

#[then(r#"the user is told that task {id:u64} could not move to "{status}""#)]
fn user_told_of_rejection(
    world: &DragDropWorld,
    id: u64,
    status: String,
) -> Result<(), eyre::Report> {
    let rejections = world.surface.rejections();
    let [rejection] = rejections.as_slice() else {
        eyre::bail!("expected one rejection, found {rejections:?}");
    };
    eyre::ensure!(
        rejection.task_id == ItemId::new(id) && rejection.target_status.as_str() == status,
        "unexpected rejection {rejection:?}"
    );
    Ok(())
}
