//! Board model: ordered statuses plus the tasks partitioned across them.

use super::{ColumnLayout, ItemId, Status, Task, compute_default_layout};
use serde::Serialize;

/// One rendered column: a status and the tasks currently in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    /// Column status label.
    pub status: Status,
    /// Tasks in load order.
    pub tasks: Vec<Task>,
}

/// Immutable board contents produced by one load.
///
/// `statuses` comes from the status field's declared choices and is never
/// recomputed from the tasks. Updates produce a new model so holders can swap
/// it atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardModel {
    statuses: Vec<Status>,
    tasks: Vec<Task>,
}

impl BoardModel {
    /// Creates a model from ordered statuses and loaded tasks.
    #[must_use]
    pub const fn new(statuses: Vec<Status>, tasks: Vec<Task>) -> Self {
        Self { statuses, tasks }
    }

    /// Returns the ordered statuses.
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Returns every loaded task, including unplaced ones.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds the first task with `id`.
    #[must_use]
    pub fn task(&self, id: ItemId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Partitions the tasks into one column per status, in status order.
    ///
    /// Tasks whose status is not a declared status appear in no column.
    #[must_use]
    pub fn columns(&self) -> Vec<BoardColumn> {
        self.statuses
            .iter()
            .map(|status| BoardColumn {
                status: status.clone(),
                tasks: self
                    .tasks
                    .iter()
                    .filter(|task| task.status() == status)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Returns tasks whose status matches no column.
    #[must_use]
    pub fn unplaced_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| !self.statuses.contains(task.status()))
            .collect()
    }

    /// Returns the layout for this board's column count.
    #[must_use]
    pub fn layout(&self) -> ColumnLayout {
        compute_default_layout(i64::try_from(self.statuses.len()).unwrap_or(i64::MAX))
    }

    /// Returns a copy of the model with task `id` moved to `status`.
    ///
    /// Every task carrying `id` is updated. Returns `None` when no task has
    /// that id.
    #[must_use]
    pub fn with_task_status(&self, id: ItemId, status: &Status) -> Option<Self> {
        self.task(id)?;
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == id {
                    task.with_status(status.clone())
                } else {
                    task.clone()
                }
            })
            .collect();
        Some(Self {
            statuses: self.statuses.clone(),
            tasks,
        })
    }
}
