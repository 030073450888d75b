//! In-memory adapters for board ports.

mod record_store;
mod surface;

pub use record_store::{InMemoryRecordStore, RecordedUpdate, StoreOperation};
pub use surface::InMemoryBoardSurface;
