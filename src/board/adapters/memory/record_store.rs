//! In-memory record store for board tests and local wiring.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::board::{
    domain::{FieldInfo, FieldName, ItemId, ListId, ListInfo},
    ports::{FieldValues, RawRecord, RecordStore, RecordStoreError, RecordStoreResult},
};

/// Field holding each item's integer identifier.
const ID_FIELD: &str = "Id";

/// Store operations that can be delayed or made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// [`RecordStore::list_lists`].
    ListLists,
    /// [`RecordStore::list_field`].
    ListField,
    /// [`RecordStore::list_items`].
    ListItems,
    /// [`RecordStore::update_item`].
    UpdateItem,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListLists => "list_lists",
            Self::ListField => "list_field",
            Self::ListItems => "list_items",
            Self::UpdateItem => "update_item",
        };
        f.write_str(name)
    }
}

/// An `update_item` call as received, whether or not it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    /// Target list.
    pub list_id: ListId,
    /// Target item.
    pub item_id: ItemId,
    /// Values written.
    pub fields: FieldValues,
}

/// Thread-safe in-memory record store.
///
/// Besides storing lists and items it can inject failures and latency per
/// operation, and it logs every `update_item` call it receives.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    lists: Vec<StoredList>,
    failing: HashSet<StoreOperation>,
    latency: HashMap<StoreOperation, Duration>,
    update_log: Vec<RecordedUpdate>,
}

#[derive(Debug)]
struct StoredList {
    info: ListInfo,
    items: Vec<RawRecord>,
}

fn lock_error(err: impl fmt::Display) -> RecordStoreError {
    RecordStoreError::unavailable(std::io::Error::other(err.to_string()))
}

fn find_list<'a>(
    state: &'a InMemoryStoreState,
    list_id: &ListId,
) -> RecordStoreResult<&'a StoredList> {
    state
        .lists
        .iter()
        .find(|list| list.info.id == list_id.as_str())
        .ok_or_else(|| RecordStoreError::ListNotFound(list_id.clone()))
}

fn find_list_mut<'a>(
    state: &'a mut InMemoryStoreState,
    list_id: &ListId,
) -> RecordStoreResult<&'a mut StoredList> {
    state
        .lists
        .iter_mut()
        .find(|list| list.info.id == list_id.as_str())
        .ok_or_else(|| RecordStoreError::ListNotFound(list_id.clone()))
}

fn item_id_of(record: &RawRecord) -> Option<ItemId> {
    record.get(ID_FIELD).and_then(Value::as_u64).map(ItemId::new)
}

fn project(record: &RawRecord, fields: &[String]) -> RawRecord {
    fields
        .iter()
        .filter_map(|field| {
            record
                .get(field)
                .map(|value| (field.clone(), value.clone()))
        })
        .collect()
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a list, replacing any list with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Unavailable`] when lock acquisition fails.
    pub fn add_list(&self, info: ListInfo) -> RecordStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.lists.retain(|list| list.info.id != info.id);
        state.lists.push(StoredList {
            info,
            items: Vec::new(),
        });
        Ok(())
    }

    /// Appends an item to a list.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::ListNotFound`] when the list is unknown.
    pub fn insert_item(&self, list_id: &ListId, record: RawRecord) -> RecordStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        find_list_mut(&mut state, list_id)?.items.push(record);
        Ok(())
    }

    /// Returns the stored item with `item_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::ListNotFound`] when the list is unknown.
    pub fn item(&self, list_id: &ListId, item_id: ItemId) -> RecordStoreResult<Option<RawRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(find_list(&state, list_id)?
            .items
            .iter()
            .find(|record| item_id_of(record) == Some(item_id))
            .cloned())
    }

    /// Makes `operation` fail until [`Self::recover`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Unavailable`] when lock acquisition fails.
    pub fn fail_on(&self, operation: StoreOperation) -> RecordStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failing.insert(operation);
        Ok(())
    }

    /// Lets `operation` succeed again.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Unavailable`] when lock acquisition fails.
    pub fn recover(&self, operation: StoreOperation) -> RecordStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failing.remove(&operation);
        Ok(())
    }

    /// Delays every call of `operation` by `latency`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Unavailable`] when lock acquisition fails.
    pub fn delay(&self, operation: StoreOperation, latency: Duration) -> RecordStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.latency.insert(operation, latency);
        Ok(())
    }

    /// Returns every `update_item` call received so far.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Unavailable`] when lock acquisition fails.
    pub fn updates(&self) -> RecordStoreResult<Vec<RecordedUpdate>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.update_log.clone())
    }

    /// Applies configured latency, then the configured failure, if any.
    async fn simulate(&self, operation: StoreOperation) -> RecordStoreResult<()> {
        let (latency, failing) = {
            let state = self.state.read().map_err(lock_error)?;
            (
                state.latency.get(&operation).copied(),
                state.failing.contains(&operation),
            )
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if failing {
            return Err(RecordStoreError::unavailable(std::io::Error::other(
                format!("simulated {operation} failure"),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_lists(&self) -> RecordStoreResult<Vec<ListInfo>> {
        self.simulate(StoreOperation::ListLists).await?;
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.lists.iter().map(|list| list.info.clone()).collect())
    }

    async fn list_field(
        &self,
        list_id: &ListId,
        field: &FieldName,
    ) -> RecordStoreResult<FieldInfo> {
        self.simulate(StoreOperation::ListField).await?;
        let state = self.state.read().map_err(lock_error)?;
        find_list(&state, list_id)?
            .info
            .field(field.as_str())
            .cloned()
            .ok_or_else(|| RecordStoreError::FieldNotFound {
                list_id: list_id.clone(),
                field: field.clone(),
            })
    }

    async fn list_items(
        &self,
        list_id: &ListId,
        fields: &[String],
    ) -> RecordStoreResult<Vec<RawRecord>> {
        self.simulate(StoreOperation::ListItems).await?;
        let state = self.state.read().map_err(lock_error)?;
        Ok(find_list(&state, list_id)?
            .items
            .iter()
            .map(|record| project(record, fields))
            .collect())
    }

    async fn update_item(
        &self,
        list_id: &ListId,
        item_id: ItemId,
        fields: FieldValues,
    ) -> RecordStoreResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            state.update_log.push(RecordedUpdate {
                list_id: list_id.clone(),
                item_id,
                fields: fields.clone(),
            });
        }
        self.simulate(StoreOperation::UpdateItem).await?;

        let mut state = self.state.write().map_err(lock_error)?;
        let record = find_list_mut(&mut state, list_id)?
            .items
            .iter_mut()
            .find(|record| item_id_of(record) == Some(item_id))
            .ok_or_else(|| RecordStoreError::ItemNotFound {
                list_id: list_id.clone(),
                item_id,
            })?;
        record.extend(fields);
        Ok(())
    }
}
