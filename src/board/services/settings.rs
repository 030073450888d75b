//! Settings discovery against the record store.

use super::deadline::{CallPolicy, StoreCallError, within};
use crate::board::{
    domain::{BoardConfig, ListInfo, SettingOption, list_options, status_field_options},
    ports::RecordStore,
};
use serde::Serialize;
use std::sync::Arc;

/// Dropdown contents for the board's settings UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsPane {
    /// Candidate task lists.
    pub lists: Vec<SettingOption>,
    /// `Choice` fields of the selected list.
    pub status_fields: Vec<SettingOption>,
}

/// Offers the lists and status fields a board can be configured with.
#[derive(Clone)]
pub struct SettingsService<S>
where
    S: RecordStore,
{
    store: Arc<S>,
    policy: CallPolicy,
}

impl<S> SettingsService<S>
where
    S: RecordStore,
{
    /// Creates a settings service.
    #[must_use]
    pub const fn new(store: Arc<S>, policy: CallPolicy) -> Self {
        Self { store, policy }
    }

    /// Fetches every list with its fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreCallError`] when the store fails or times out.
    pub async fn available_lists(&self) -> Result<Vec<ListInfo>, StoreCallError> {
        within(self.policy, "list_lists", self.store.list_lists()).await
    }

    /// Builds the dropdown contents for `config`'s current selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreCallError`] when the list fetch fails or times out.
    pub async fn settings_pane(
        &self,
        config: &BoardConfig,
    ) -> Result<SettingsPane, StoreCallError> {
        let lists = self.available_lists().await?;
        Ok(SettingsPane {
            lists: list_options(&lists),
            status_fields: status_field_options(&lists, config.tasks_list_id.as_deref()),
        })
    }
}
