//! Domain model for the task board.
//!
//! Everything here is pure: no store access, no clocks, no locks. Services
//! feed these values with data fetched through the ports.

mod config;
mod discovery;
mod error;
mod ids;
mod layout;
mod metadata;
mod model;
mod task;
mod transition;

pub use config::{BoardConfig, BoardTarget, CONFIGURE_PROMPT};
pub use discovery::{SettingOption, available_status_fields, list_options, status_field_options};
pub use error::{BoardDomainError, ConfigurationMissing};
pub use ids::{FieldName, ItemId, ListId};
pub use layout::{ColumnLayout, LAYOUT_MAX_COLUMNS, compute_default_layout, compute_layout};
pub use metadata::{CHOICE_FIELD_TYPE, FieldInfo, ListInfo};
pub use model::{BoardColumn, BoardModel};
pub use task::{Status, Task};
pub use transition::{CommitRejected, DropEvent, DropOutcome, GesturePhase, TransitionDecision};
