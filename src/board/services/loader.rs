//! Two-step board load: status metadata first, then tasks.

use super::deadline::{CallPolicy, StoreCallError, within};
use crate::board::{
    domain::{BoardModel, BoardTarget, FieldName, Status, Task},
    ports::{RawRecord, RecordStore},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Field holding each item's integer identifier.
pub const ID_FIELD: &str = "Id";

/// Field holding each item's display title.
pub const TITLE_FIELD: &str = "Title";

/// Reasons a board load was abandoned.
#[derive(Debug, Clone, Error)]
pub enum LoadFailure {
    /// The status field's metadata could not be fetched.
    #[error("failed to load status field: {0}")]
    StatusField(StoreCallError),

    /// The list items could not be fetched.
    #[error("failed to load tasks: {0}")]
    Items(StoreCallError),

    /// An item could not be mapped to a task.
    #[error("malformed task record at position {position}: {reason}")]
    MalformedRecord {
        /// Zero-based position in the fetched items.
        position: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// A loaded board and the target it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBoard {
    /// Requested target with the status field resolved to its internal name.
    pub target: BoardTarget,
    /// Board contents.
    pub model: BoardModel,
}

/// Builds [`BoardModel`]s from a record store.
#[derive(Clone)]
pub struct BoardLoader<S>
where
    S: RecordStore,
{
    store: Arc<S>,
    policy: CallPolicy,
}

impl<S> BoardLoader<S>
where
    S: RecordStore,
{
    /// Creates a loader.
    #[must_use]
    pub const fn new(store: Arc<S>, policy: CallPolicy) -> Self {
        Self { store, policy }
    }

    /// Loads statuses, then tasks, for `target`.
    ///
    /// The configured status field is resolved through the store's metadata
    /// first; its internal name selects the status attribute of each item,
    /// which is then renamed to the task's `status`. The returned target
    /// carries that internal name so status writes use the same key.
    ///
    /// # Errors
    ///
    /// Returns [`LoadFailure`] when either fetch fails or times out, or when
    /// an item cannot be mapped to a task.
    pub async fn load(&self, target: &BoardTarget) -> Result<ResolvedBoard, LoadFailure> {
        let field = within(
            self.policy,
            "list_field",
            self.store.list_field(target.list_id(), target.status_field()),
        )
        .await
        .map_err(LoadFailure::StatusField)?;

        let statuses = if field.is_choice() {
            field.declared_statuses()
        } else {
            warn!(
                field = %field.internal_name,
                field_type = %field.type_as_string,
                "status field is not a Choice field; board has no columns"
            );
            Vec::new()
        };
        debug!(list = %target.list_id(), statuses = statuses.len(), "loaded statuses");
        let resolved = FieldName::new(field.internal_name.as_str()).map_or_else(
            |_| {
                warn!(field = %target.status_field(), "status field has no internal name");
                target.clone()
            },
            |internal_name| target.with_status_field(internal_name),
        );

        let select = [
            ID_FIELD.to_owned(),
            TITLE_FIELD.to_owned(),
            field.internal_name.clone(),
        ];
        let records = within(
            self.policy,
            "list_items",
            self.store.list_items(target.list_id(), &select),
        )
        .await
        .map_err(LoadFailure::Items)?;

        let tasks = records
            .iter()
            .enumerate()
            .map(|(position, record)| task_from_record(position, record, &field.internal_name))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(list = %target.list_id(), tasks = tasks.len(), "loaded tasks");

        let model = BoardModel::new(statuses, tasks);
        let unplaced = model.unplaced_tasks().len();
        if unplaced > 0 {
            warn!(unplaced, "tasks with undeclared statuses are not shown");
        }
        Ok(ResolvedBoard {
            target: resolved,
            model,
        })
    }
}

fn task_from_record(
    position: usize,
    record: &RawRecord,
    status_field: &str,
) -> Result<Task, LoadFailure> {
    let malformed = |reason: String| LoadFailure::MalformedRecord { position, reason };

    let id = record
        .get(ID_FIELD)
        .and_then(Value::as_u64)
        .ok_or_else(|| malformed(format!("'{ID_FIELD}' is missing or not an unsigned integer")))?;
    let title = optional_text(record, TITLE_FIELD).map_err(malformed)?;
    let status = optional_text(record, status_field).map_err(malformed)?;

    Ok(Task::new(id.into(), title, Status::new(status)))
}

/// Reads a string attribute; absent and null values read as empty.
fn optional_text(record: &RawRecord, field: &str) -> Result<String, String> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(format!("'{field}' is not text: {other}")),
    }
}
