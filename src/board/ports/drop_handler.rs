//! Capability interface between a drag-and-drop layer and the board.

use crate::board::domain::{DropEvent, DropOutcome};
use async_trait::async_trait;

/// Receives drops from whatever direct-manipulation layer the UI uses.
#[async_trait]
pub trait DropHandler: Send + Sync {
    /// Handles a card released over a column.
    async fn on_dropped(&self, event: DropEvent) -> DropOutcome;
}
