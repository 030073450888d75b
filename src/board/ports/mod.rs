//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod drop_handler;
pub mod record_store;
pub mod surface;

pub use drop_handler::DropHandler;
pub use record_store::{FieldValues, RawRecord, RecordStore, RecordStoreError, RecordStoreResult};
pub use surface::BoardSurface;
