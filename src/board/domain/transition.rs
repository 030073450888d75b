//! Drag-and-drop gesture phases and drop decisions.

use super::{ItemId, Status};
use serde::{Deserialize, Serialize};

/// Phase of a single drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// A card is being dragged.
    Dragging,
    /// The card was released over a column.
    Dropped,
    /// A status change is being persisted.
    Committing,
    /// The drop stayed within the source column.
    NoOp,
}

impl GesturePhase {
    /// Returns `true` when a gesture may move from `self` to `next`.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Dragging)
                | (Self::Dragging, Self::Dropped | Self::Idle)
                | (Self::Dropped, Self::Committing | Self::NoOp)
                | (Self::Committing | Self::NoOp, Self::Idle)
        )
    }
}

/// What to do with a drop once its columns are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionDecision {
    /// Same column: visual reposition only.
    Reposition,
    /// Different column: persist the target status.
    Commit {
        /// Status to persist.
        target: Status,
    },
}

/// A card released over a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropEvent {
    /// Identifier of the dragged task.
    pub task_id: ItemId,
    /// Status of the column the card was dragged from.
    pub source_status: Status,
    /// Status of the column under the drop point.
    pub target_status: Status,
}

impl DropEvent {
    /// Creates a drop event.
    #[must_use]
    pub fn new(
        task_id: ItemId,
        source_status: impl Into<Status>,
        target_status: impl Into<Status>,
    ) -> Self {
        Self {
            task_id,
            source_status: source_status.into(),
            target_status: target_status.into(),
        }
    }

    /// Decides whether the drop changes the task's status.
    #[must_use]
    pub fn decide(&self) -> TransitionDecision {
        if self.source_status == self.target_status {
            TransitionDecision::Reposition
        } else {
            TransitionDecision::Commit {
                target: self.target_status.clone(),
            }
        }
    }
}

/// Notice shown to the user when a status change could not be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRejected {
    /// Identifier of the task that was moved back.
    pub task_id: ItemId,
    /// Column the card was returned to.
    pub source_status: Status,
    /// Column the user dropped the card on.
    pub target_status: Status,
    /// Human-readable cause.
    pub reason: String,
}

/// Result of handling one drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Same-column drop; nothing was persisted.
    Repositioned,
    /// The new status was persisted and applied to the board model.
    Committed,
    /// Persisting failed; the card is back in its source column.
    Reverted(CommitRejected),
}
