//! Render cycle: configuration check, load, atomic install.

use super::deadline::CallPolicy;
use super::loader::{BoardLoader, LoadFailure};
use crate::board::{
    domain::{
        BoardColumn, BoardConfig, BoardModel, BoardTarget, ColumnLayout, ConfigurationMissing,
        ItemId, Status,
    },
    ports::RecordStore,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, info};

/// Everything needed to draw the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Where the board was loaded from.
    pub target: BoardTarget,
    /// Board contents.
    pub model: Arc<BoardModel>,
    /// Tasks partitioned by status.
    pub columns: Vec<BoardColumn>,
    /// Column width assignment.
    pub layout: ColumnLayout,
    /// When the installed load completed.
    pub loaded_at: DateTime<Utc>,
    /// Load generation that produced the model.
    pub generation: u64,
}

#[derive(Debug, Clone)]
struct LoadedBoard {
    target: BoardTarget,
    model: Arc<BoardModel>,
    loaded_at: DateTime<Utc>,
    generation: u64,
}

impl LoadedBoard {
    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            target: self.target.clone(),
            model: Arc::clone(&self.model),
            columns: self.model.columns(),
            layout: self.model.layout(),
            loaded_at: self.loaded_at,
            generation: self.generation,
        }
    }
}

/// Shared holder of the installed board.
///
/// Loads are numbered as they start. A finished load is installed only if it
/// started after the installed one, so a slow stale load never replaces a
/// newer board. The model is swapped as a whole under the lock.
#[derive(Debug, Default)]
pub struct BoardState {
    current: RwLock<Option<LoadedBoard>>,
    issued: AtomicU64,
}

impl BoardState {
    /// Creates an empty state with no board installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the generation number for a load that is starting.
    pub fn begin_load(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst).saturating_add(1)
    }

    /// Installs a loaded model unless a newer load is already installed.
    ///
    /// Returns the snapshot of the model just installed, or `None` when the
    /// load was superseded.
    pub fn install(
        &self,
        generation: u64,
        target: BoardTarget,
        model: BoardModel,
        loaded_at: DateTime<Utc>,
    ) -> Option<BoardSnapshot> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current
            .as_ref()
            .is_some_and(|loaded| loaded.generation >= generation)
        {
            return None;
        }
        let loaded = LoadedBoard {
            target,
            model: Arc::new(model),
            loaded_at,
            generation,
        };
        let snapshot = loaded.snapshot();
        *current = Some(loaded);
        Some(snapshot)
    }

    /// Returns the installed model.
    #[must_use]
    pub fn model(&self) -> Option<Arc<BoardModel>> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.as_ref().map(|loaded| Arc::clone(&loaded.model))
    }

    /// Returns the target of the installed board.
    #[must_use]
    pub fn target(&self) -> Option<BoardTarget> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.as_ref().map(|loaded| loaded.target.clone())
    }

    /// Builds a snapshot of the installed board.
    #[must_use]
    pub fn snapshot(&self) -> Option<BoardSnapshot> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.as_ref().map(LoadedBoard::snapshot)
    }

    /// Replaces the installed model with one where `task_id` has `status`.
    ///
    /// Returns `false` when no board is installed, the installed board was
    /// loaded from a different `target`, or the task is not on it.
    pub fn apply_status(&self, target: &BoardTarget, task_id: ItemId, status: &Status) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let Some(loaded) = current
            .as_mut()
            .filter(|loaded| loaded.target == *target)
        else {
            return false;
        };
        match loaded.model.with_task_status(task_id, status) {
            Some(updated) => {
                loaded.model = Arc::new(updated);
                true
            }
            None => false,
        }
    }
}

/// Result of one render cycle.
#[derive(Debug, Clone)]
pub enum RenderOutcome {
    /// Settings are incomplete; show the configuration prompt.
    Unconfigured(ConfigurationMissing),
    /// A fresh board was installed.
    Rendered(BoardSnapshot),
    /// A newer load finished first; this one was discarded.
    Superseded,
    /// The load failed; the previous board, if any, stays on screen.
    Failed {
        /// Why the load failed.
        failure: LoadFailure,
        /// Board that remains displayed.
        retained: Option<BoardSnapshot>,
    },
}

impl RenderOutcome {
    /// Returns the board to display after this cycle, if any.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&BoardSnapshot> {
        match self {
            Self::Rendered(snapshot) => Some(snapshot),
            Self::Failed { retained, .. } => retained.as_ref(),
            Self::Unconfigured(_) | Self::Superseded => None,
        }
    }
}

/// Drives render cycles against a record store.
#[derive(Clone)]
pub struct BoardPipeline<S, C>
where
    S: RecordStore,
    C: Clock + Send + Sync,
{
    loader: BoardLoader<S>,
    state: Arc<BoardState>,
    clock: Arc<C>,
}

impl<S, C> BoardPipeline<S, C>
where
    S: RecordStore,
    C: Clock + Send + Sync,
{
    /// Creates a pipeline installing boards into `state`.
    #[must_use]
    pub const fn new(
        store: Arc<S>,
        state: Arc<BoardState>,
        clock: Arc<C>,
        policy: CallPolicy,
    ) -> Self {
        Self {
            loader: BoardLoader::new(store, policy),
            state,
            clock,
        }
    }

    /// Returns the shared board state.
    #[must_use]
    pub const fn state(&self) -> &Arc<BoardState> {
        &self.state
    }

    /// Runs one render cycle for `config`.
    ///
    /// Every call performs a fresh load. Failures are logged and contained:
    /// the previously installed board is left untouched.
    pub async fn render(&self, config: &BoardConfig) -> RenderOutcome {
        let target = match config.resolve() {
            Ok(target) => target,
            Err(missing) => {
                debug!(%missing, "board is not configured");
                return RenderOutcome::Unconfigured(missing);
            }
        };

        let generation = self.state.begin_load();
        match self.loader.load(&target).await {
            Ok(resolved) => {
                let installed = self.state.install(
                    generation,
                    resolved.target,
                    resolved.model,
                    self.clock.utc(),
                );
                let Some(snapshot) = installed else {
                    debug!(generation, "discarding superseded board load");
                    return RenderOutcome::Superseded;
                };
                info!(generation, "board installed");
                RenderOutcome::Rendered(snapshot)
            }
            Err(failure) => {
                error!(%failure, generation, "board load failed; keeping previous board");
                RenderOutcome::Failed {
                    failure,
                    retained: self.state.snapshot(),
                }
            }
        }
    }
}
