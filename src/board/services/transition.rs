//! Drop handling: visual move, status commit, revert on failure.

use super::deadline::{CallPolicy, StoreCallError, within};
use super::pipeline::BoardState;
use crate::board::{
    domain::{
        CommitRejected, DropEvent, DropOutcome, GesturePhase, ItemId, Status, TransitionDecision,
    },
    ports::{BoardSurface, DropHandler, FieldValues, RecordStore},
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Reasons a status change could not be saved.
#[derive(Debug, Clone, Error)]
pub enum PersistenceFailure {
    /// No board is installed, so there is no list to write to.
    #[error("no board is loaded")]
    BoardNotLoaded,

    /// The store rejected the update or did not answer in time.
    #[error("failed to save status: {0}")]
    Store(StoreCallError),
}

/// Persists drag-and-drop status changes.
///
/// The card moves on the surface as soon as it is dropped. Cross-column drops
/// then write the new status, under the field's internal name, to the store:
/// success updates the installed board model, failure moves the card to the
/// status the installed board holds for it and tells the user. Commits run
/// independently; the last write to finish wins.
pub struct TransitionController<S, V>
where
    S: RecordStore,
    V: BoardSurface,
{
    store: Arc<S>,
    surface: Arc<V>,
    state: Arc<BoardState>,
    policy: CallPolicy,
    in_flight: Mutex<HashMap<ItemId, usize>>,
}

/// Marks a task as committing for as long as it is alive.
struct InFlight<'a> {
    counts: &'a Mutex<HashMap<ItemId, usize>>,
    task_id: ItemId,
}

impl<'a> InFlight<'a> {
    fn enter(counts: &'a Mutex<HashMap<ItemId, usize>>, task_id: ItemId) -> Self {
        let mut guard = counts.lock().unwrap_or_else(PoisonError::into_inner);
        let count = guard.entry(task_id).or_default();
        *count = count.saturating_add(1);
        Self { counts, task_id }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut guard = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(count) = guard.get_mut(&self.task_id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                guard.remove(&self.task_id);
            }
        }
    }
}

impl<S, V> TransitionController<S, V>
where
    S: RecordStore,
    V: BoardSurface,
{
    /// Creates a controller writing to `store` for the board in `state`.
    #[must_use]
    pub fn new(
        store: Arc<S>,
        surface: Arc<V>,
        state: Arc<BoardState>,
        policy: CallPolicy,
    ) -> Self {
        Self {
            store,
            surface,
            state,
            policy,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Returns [`GesturePhase::Committing`] while a save for `task_id` is in
    /// flight, otherwise [`GesturePhase::Idle`].
    #[must_use]
    pub fn phase(&self, task_id: ItemId) -> GesturePhase {
        let counts = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if counts.contains_key(&task_id) {
            GesturePhase::Committing
        } else {
            GesturePhase::Idle
        }
    }

    /// Status of `task_id` on the installed board, if it is there.
    fn installed_status(&self, task_id: ItemId) -> Option<Status> {
        self.state
            .model()
            .and_then(|model| model.task(task_id).map(|task| task.status().clone()))
    }

    async fn commit(&self, event: &DropEvent) -> Result<(), PersistenceFailure> {
        let target = self
            .state
            .target()
            .ok_or(PersistenceFailure::BoardNotLoaded)?;

        let mut fields = FieldValues::new();
        fields.insert(
            target.status_field().as_str().to_owned(),
            Value::String(event.target_status.as_str().to_owned()),
        );

        let _in_flight = InFlight::enter(&self.in_flight, event.task_id);
        within(
            self.policy,
            "update_item",
            self.store.update_item(target.list_id(), event.task_id, fields),
        )
        .await
        .map_err(PersistenceFailure::Store)?;

        if !self
            .state
            .apply_status(&target, event.task_id, &event.target_status)
        {
            warn!(task_id = %event.task_id, "saved task is not on the installed board");
        }
        Ok(())
    }
}

#[async_trait]
impl<S, V> DropHandler for TransitionController<S, V>
where
    S: RecordStore,
    V: BoardSurface,
{
    async fn on_dropped(&self, event: DropEvent) -> DropOutcome {
        self.surface.place_card(event.task_id, &event.target_status);

        let TransitionDecision::Commit { target } = event.decide() else {
            debug!(task_id = %event.task_id, "card repositioned within its column");
            return DropOutcome::Repositioned;
        };

        match self.commit(&event).await {
            Ok(()) => {
                info!(
                    task_id = %event.task_id,
                    from = %event.source_status,
                    to = %target,
                    "task status saved"
                );
                DropOutcome::Committed
            }
            Err(failure) => {
                error!(
                    task_id = %event.task_id,
                    %failure,
                    "task status not saved; returning card to its column"
                );
                let restored = self
                    .installed_status(event.task_id)
                    .unwrap_or_else(|| event.source_status.clone());
                self.surface.place_card(event.task_id, &restored);
                let rejection = CommitRejected {
                    task_id: event.task_id,
                    source_status: event.source_status,
                    target_status: target,
                    reason: failure.to_string(),
                };
                self.surface.report_rejection(&rejection);
                DropOutcome::Reverted(rejection)
            }
        }
    }
}
