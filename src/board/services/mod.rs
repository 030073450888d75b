//! Application services for loading boards and persisting drops.

mod deadline;
mod loader;
mod pipeline;
mod settings;
mod transition;

pub use deadline::{CallPolicy, StoreCallError};
pub use loader::{BoardLoader, ID_FIELD, LoadFailure, ResolvedBoard, TITLE_FIELD};
pub use pipeline::{BoardPipeline, BoardSnapshot, BoardState, RenderOutcome};
pub use settings::{SettingsPane, SettingsService};
pub use transition::{PersistenceFailure, TransitionController};
