//! Given steps for drag-and-drop BDD scenarios.

use super::world::{DragDropWorld, run_async};
use rstest_bdd_macros::given;
use serde_json::json;
use taskboard::board::{
    adapters::memory::StoreOperation,
    domain::{BoardConfig, FieldInfo, ListId, ListInfo},
    ports::RawRecord,
};

#[given(r#"a task list "{list_id}" with status field "{field}" offering "{choices}""#)]
fn task_list_with_status_field(
    world: &mut DragDropWorld,
    list_id: String,
    field: String,
    choices: String,
) -> Result<(), eyre::Report> {
    world.store.add_list(ListInfo::new(
        list_id.clone(),
        "Tasks",
        vec![FieldInfo::choice(
            field.clone(),
            field.clone(),
            choices.split(',').map(str::trim),
        )],
    ))?;
    world.config = Some(BoardConfig::new(list_id, field));
    Ok(())
}

#[given(r#"task {id:u64} "{title}" in status "{status}""#)]
fn task_in_status(
    world: &mut DragDropWorld,
    id: u64,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let config = world.config()?;
    let list_id = ListId::new(config.tasks_list_id.clone().unwrap_or_default())?;
    let field = config
        .status_field_name
        .clone()
        .ok_or_else(|| eyre::eyre!("missing status field in scenario world"))?;

    let mut record = RawRecord::new();
    record.insert("Id".to_owned(), json!(id));
    record.insert("Title".to_owned(), json!(title));
    record.insert(field, json!(status));
    world.store.insert_item(&list_id, record)?;
    Ok(())
}

#[given("the board has been rendered")]
fn board_rendered(world: &mut DragDropWorld) -> Result<(), eyre::Report> {
    let config = world.config()?.clone();
    let outcome = run_async(world.pipeline.render(&config));
    let snapshot = outcome
        .snapshot()
        .ok_or_else(|| eyre::eyre!("board failed to render: {outcome:?}"))?;
    world.surface.show(&snapshot.model);
    Ok(())
}

#[given("the store rejects status saves")]
fn store_rejects_saves(world: &mut DragDropWorld) -> Result<(), eyre::Report> {
    world.store.fail_on(StoreOperation::UpdateItem)?;
    Ok(())
}
