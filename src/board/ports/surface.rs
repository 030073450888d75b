//! Visual surface port: where cards are shown and users are told about
//! failed saves.

use crate::board::domain::{CommitRejected, ItemId, Status};

/// The UI layer displaying the board.
///
/// Calls arrive on the board's event loop and must not block.
pub trait BoardSurface: Send + Sync {
    /// Shows the card for `task_id` in the column for `status`.
    fn place_card(&self, task_id: ItemId, status: &Status);

    /// Tells the user that a status change was not saved.
    fn report_rejection(&self, rejection: &CommitRejected);
}
