//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::{Value, json};
use taskboard::board::{
    adapters::memory::{InMemoryBoardSurface, InMemoryRecordStore},
    domain::{BoardConfig, FieldInfo, ListId, ListInfo},
    ports::RawRecord,
    services::{BoardPipeline, BoardState, CallPolicy, TransitionController},
};

/// Id of the seeded task list.
pub const LIST_ID: &str = "sprint";
/// Internal name of the seeded status field.
pub const STATUS_FIELD: &str = "Progress";

/// Pipeline type used by the harness.
pub type TestPipeline = BoardPipeline<InMemoryRecordStore, DefaultClock>;
/// Controller type used by the harness.
pub type TestController = TransitionController<InMemoryRecordStore, InMemoryBoardSurface>;

/// A board wired end to end over one in-memory store.
pub struct BoardHarness {
    pub store: InMemoryRecordStore,
    pub surface: Arc<InMemoryBoardSurface>,
    pub state: Arc<BoardState>,
    pub pipeline: TestPipeline,
    pub controller: TestController,
}

impl BoardHarness {
    /// Wires a pipeline and controller sharing `store` and one board state.
    #[must_use]
    pub fn over(store: InMemoryRecordStore, policy: CallPolicy) -> Self {
        let shared = Arc::new(store.clone());
        let surface = Arc::new(InMemoryBoardSurface::new());
        let state = Arc::new(BoardState::new());
        let pipeline = BoardPipeline::new(
            Arc::clone(&shared),
            Arc::clone(&state),
            Arc::new(DefaultClock),
            policy,
        );
        let controller = TransitionController::new(
            shared,
            Arc::clone(&surface),
            Arc::clone(&state),
            policy,
        );
        Self {
            store,
            surface,
            state,
            pipeline,
            controller,
        }
    }

    /// Returns the stored status of `item_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or the item is missing.
    pub fn stored_status(&self, item_id: u64) -> Result<Value, eyre::Report> {
        let record = self
            .store
            .item(&list_id()?, item_id.into())?
            .ok_or_else(|| eyre::eyre!("item {item_id} missing from store"))?;
        Ok(record.get(STATUS_FIELD).cloned().unwrap_or(Value::Null))
    }
}

/// Returns the seeded list id.
///
/// # Errors
///
/// Returns an error if the id fails validation.
pub fn list_id() -> Result<ListId, eyre::Report> {
    Ok(ListId::new(LIST_ID)?)
}

/// Configuration pointing at the seeded list and status field.
#[must_use]
pub fn config() -> BoardConfig {
    BoardConfig::new(LIST_ID, STATUS_FIELD)
}

fn record(id: u64, title: &str, status: &str) -> RawRecord {
    let mut record = RawRecord::new();
    record.insert("Id".to_owned(), json!(id));
    record.insert("Title".to_owned(), json!(title));
    record.insert(STATUS_FIELD.to_owned(), json!(status));
    record
}

/// Store with a sprint list of three columns and a second, choiceless list.
#[fixture]
pub fn store() -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();
    store
        .add_list(ListInfo::new(
            LIST_ID,
            "Sprint board",
            vec![
                FieldInfo::new("Title", "Title", "Text"),
                FieldInfo::choice("Progress", STATUS_FIELD, ["Backlog", "Active", "Closed"]),
                FieldInfo::choice("Priority", "Priority", ["Low", "High"]),
            ],
        ))
        .expect("sprint list should be added");
    store
        .add_list(ListInfo::new(
            "docs",
            "Documents",
            vec![FieldInfo::new("Title", "Title", "Text")],
        ))
        .expect("docs list should be added");
    let sprint = list_id().expect("seeded list id should be valid");
    for item in [
        record(10, "Plan release", "Backlog"),
        record(11, "Fix login", "Active"),
        record(12, "Write notes", "Active"),
        record(13, "Tag build", "Closed"),
    ] {
        store
            .insert_item(&sprint, item)
            .expect("seeded item should be inserted");
    }
    store
}

/// Board harness over the seeded store with the default call policy.
#[fixture]
pub fn harness(store: InMemoryRecordStore) -> BoardHarness {
    BoardHarness::over(store, CallPolicy::default())
}
