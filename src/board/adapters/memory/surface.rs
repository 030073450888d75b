//! In-memory board surface that records placements and notices.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{
    domain::{BoardModel, CommitRejected, ItemId, Status},
    ports::BoardSurface,
};

/// Board surface that keeps card placements and rejection notices in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardSurface {
    state: Arc<RwLock<SurfaceState>>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    placements: HashMap<ItemId, Status>,
    moves: Vec<(ItemId, Status)>,
    rejections: Vec<CommitRejected>,
}

impl InMemoryBoardSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all placements with the columns of `model`.
    ///
    /// Tasks outside every column are not shown.
    pub fn show(&self, model: &BoardModel) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.placements = model
            .columns()
            .into_iter()
            .flat_map(|column| {
                let status = column.status;
                column
                    .tasks
                    .into_iter()
                    .map(move |task| (task.id(), status.clone()))
            })
            .collect();
    }

    /// Returns the column the card for `task_id` is shown in.
    #[must_use]
    pub fn placement(&self, task_id: ItemId) -> Option<Status> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.placements.get(&task_id).cloned()
    }

    /// Returns every card move in the order it was requested.
    #[must_use]
    pub fn moves(&self) -> Vec<(ItemId, Status)> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.moves.clone()
    }

    /// Returns every rejection notice shown so far.
    #[must_use]
    pub fn rejections(&self) -> Vec<CommitRejected> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.rejections.clone()
    }
}

impl BoardSurface for InMemoryBoardSurface {
    fn place_card(&self, task_id: ItemId, status: &Status) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.placements.insert(task_id, status.clone());
        state.moves.push((task_id, status.clone()));
    }

    fn report_rejection(&self, rejection: &CommitRejected) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.rejections.push(rejection.clone());
    }
}
