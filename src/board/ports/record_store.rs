//! Record store port: list metadata, item reads and item updates.

use crate::board::domain::{FieldInfo, FieldName, ItemId, ListId, ListInfo};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// An item as returned by the store: field name to value.
pub type RawRecord = Map<String, Value>;

/// Field values written by an item update.
pub type FieldValues = BTreeMap<String, Value>;

/// Result type for record store operations.
pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

/// Backing data source for lists, fields and items.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Lists every list with its field metadata.
    async fn list_lists(&self) -> RecordStoreResult<Vec<ListInfo>>;

    /// Returns one field of a list, looked up by internal name or title.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::ListNotFound`] or
    /// [`RecordStoreError::FieldNotFound`] when either lookup misses.
    async fn list_field(
        &self,
        list_id: &ListId,
        field: &FieldName,
    ) -> RecordStoreResult<FieldInfo>;

    /// Returns the items of a list, projected onto `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::ListNotFound`] when the list is unknown.
    async fn list_items(
        &self,
        list_id: &ListId,
        fields: &[String],
    ) -> RecordStoreResult<Vec<RawRecord>>;

    /// Writes `fields` onto an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::ListNotFound`] or
    /// [`RecordStoreError::ItemNotFound`] when the target does not exist.
    async fn update_item(
        &self,
        list_id: &ListId,
        item_id: ItemId,
        fields: FieldValues,
    ) -> RecordStoreResult<()>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    /// No list has the identifier.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// The list has no field with the name or title.
    #[error("field '{field}' not found in list {list_id}")]
    FieldNotFound {
        /// List that was searched.
        list_id: ListId,
        /// Requested field name.
        field: FieldName,
    },

    /// The list has no item with the identifier.
    #[error("item {item_id} not found in list {list_id}")]
    ItemNotFound {
        /// List that was searched.
        list_id: ListId,
        /// Requested item.
        item_id: ItemId,
    },

    /// Transport or backend failure.
    #[error("record store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordStoreError {
    /// Wraps a backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
