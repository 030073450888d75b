//! In-memory integration tests for dragging cards between columns.

use std::time::Duration;

use super::helpers::{BoardHarness, STATUS_FIELD, config, harness, store};
use rstest::rstest;
use serde_json::json;
use taskboard::board::{
    adapters::memory::{InMemoryRecordStore, StoreOperation},
    domain::{DropEvent, DropOutcome, GesturePhase, ItemId, Status},
    ports::DropHandler,
    services::CallPolicy,
};

/// Renders the board and shows it on the harness surface.
async fn render_and_show(harness: &BoardHarness) -> Result<(), eyre::Report> {
    let outcome = harness.pipeline.render(&config()).await;
    let snapshot = outcome
        .snapshot()
        .ok_or_else(|| eyre::eyre!("expected a rendered board, got {outcome:?}"))?;
    harness.surface.show(&snapshot.model);
    Ok(())
}

fn status_of(harness: &BoardHarness, id: u64) -> Option<Status> {
    harness
        .state
        .model()
        .and_then(|model| model.task(ItemId::new(id)).map(|task| task.status().clone()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drop_into_another_column_saves_and_survives_rerender(
    harness: BoardHarness,
) -> Result<(), eyre::Report> {
    render_and_show(&harness).await?;

    let outcome = harness
        .controller
        .on_dropped(DropEvent::new(ItemId::new(10), "Backlog", "Active"))
        .await;

    assert_eq!(outcome, DropOutcome::Committed);
    assert_eq!(harness.stored_status(10)?, json!("Active"));
    assert_eq!(status_of(&harness, 10), Some(Status::from("Active")));
    assert_eq!(
        harness.surface.placement(ItemId::new(10)),
        Some(Status::from("Active"))
    );

    let rerendered = harness.pipeline.render(&config()).await;
    let snapshot = rerendered
        .snapshot()
        .ok_or_else(|| eyre::eyre!("re-render failed: {rerendered:?}"))?;
    let active = snapshot
        .columns
        .iter()
        .find(|column| column.status.as_str() == "Active")
        .ok_or_else(|| eyre::eyre!("active column missing"))?;
    assert!(active.tasks.iter().any(|task| task.id() == ItemId::new(10)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drop_writes_only_the_status_field(harness: BoardHarness) -> Result<(), eyre::Report> {
    render_and_show(&harness).await?;

    harness
        .controller
        .on_dropped(DropEvent::new(ItemId::new(13), "Closed", "Backlog"))
        .await;

    let updates = harness.store.updates()?;
    let [update] = updates.as_slice() else {
        eyre::bail!("expected one update, found {}", updates.len());
    };
    assert_eq!(update.item_id, ItemId::new(13));
    assert_eq!(update.fields.len(), 1);
    assert_eq!(update.fields.get(STATUS_FIELD), Some(&json!("Backlog")));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reordering_within_a_column_writes_nothing(
    harness: BoardHarness,
) -> Result<(), eyre::Report> {
    render_and_show(&harness).await?;

    let outcome = harness
        .controller
        .on_dropped(DropEvent::new(ItemId::new(11), "Active", "Active"))
        .await;

    assert_eq!(outcome, DropOutcome::Repositioned);
    assert!(harness.store.updates()?.is_empty());
    assert_eq!(harness.stored_status(11)?, json!("Active"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_save_returns_the_card(harness: BoardHarness) -> Result<(), eyre::Report> {
    render_and_show(&harness).await?;
    harness.store.fail_on(StoreOperation::UpdateItem)?;

    let outcome = harness
        .controller
        .on_dropped(DropEvent::new(ItemId::new(12), "Active", "Closed"))
        .await;

    let DropOutcome::Reverted(rejection) = outcome else {
        eyre::bail!("expected a reverted drop, got {outcome:?}");
    };
    assert_eq!(rejection.task_id, ItemId::new(12));
    assert_eq!(rejection.target_status, Status::from("Closed"));
    assert!(rejection.reason.contains("simulated update_item failure"));
    assert_eq!(harness.stored_status(12)?, json!("Active"));
    assert_eq!(status_of(&harness, 12), Some(Status::from("Active")));
    assert_eq!(
        harness.surface.placement(ItemId::new(12)),
        Some(Status::from("Active"))
    );
    assert_eq!(harness.surface.rejections(), [rejection]);

    harness.store.recover(StoreOperation::UpdateItem)?;
    let retried = harness
        .controller
        .on_dropped(DropEvent::new(ItemId::new(12), "Active", "Closed"))
        .await;
    assert_eq!(retried, DropOutcome::Committed);
    assert_eq!(harness.stored_status(12)?, json!("Closed"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slow_save_times_out_and_reverts(store: InMemoryRecordStore) -> Result<(), eyre::Report> {
    let harness = BoardHarness::over(
        store,
        CallPolicy::with_timeout(Duration::from_millis(50)),
    );
    render_and_show(&harness).await?;
    harness
        .store
        .delay(StoreOperation::UpdateItem, Duration::from_secs(5))?;

    let outcome = harness
        .controller
        .on_dropped(DropEvent::new(ItemId::new(10), "Backlog", "Closed"))
        .await;

    let DropOutcome::Reverted(rejection) = outcome else {
        eyre::bail!("expected a reverted drop, got {outcome:?}");
    };
    assert!(rejection.reason.contains("timed out"));
    assert_eq!(
        harness.surface.placement(ItemId::new(10)),
        Some(Status::from("Backlog"))
    );
    assert_eq!(harness.controller.phase(ItemId::new(10)), GesturePhase::Idle);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drop_before_any_render_is_rejected(harness: BoardHarness) -> Result<(), eyre::Report> {
    let outcome = harness
        .controller
        .on_dropped(DropEvent::new(ItemId::new(10), "Backlog", "Active"))
        .await;

    let DropOutcome::Reverted(rejection) = outcome else {
        eyre::bail!("expected a reverted drop, got {outcome:?}");
    };
    assert!(rejection.reason.contains("no board is loaded"));
    assert!(harness.store.updates()?.is_empty());
    assert_eq!(harness.stored_status(10)?, json!("Backlog"));
    Ok(())
}
