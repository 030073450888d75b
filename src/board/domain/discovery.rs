//! Status-field discovery for the external settings UI.

use super::{FieldInfo, ListInfo};
use serde::Serialize;

/// A key/text pair offered by a settings dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingOption {
    /// Value stored in the board configuration.
    pub key: String,
    /// Label shown to the user.
    pub text: String,
}

/// Returns the `Choice` fields of the selected list.
///
/// The lookup is exact: no selection, no matching list, or more than one list
/// with the selected id all yield an empty result.
#[must_use]
pub fn available_status_fields<'a>(
    lists: &'a [ListInfo],
    selected_list_id: Option<&str>,
) -> Vec<&'a FieldInfo> {
    let Some(selected) = selected_list_id.filter(|id| !id.is_empty()) else {
        return Vec::new();
    };

    let mut matching = lists.iter().filter(|list| list.id == selected);
    match (matching.next(), matching.next()) {
        (Some(list), None) => list.fields.iter().filter(|field| field.is_choice()).collect(),
        _ => Vec::new(),
    }
}

/// Options for the tasks-list dropdown: one per list, keyed by id.
#[must_use]
pub fn list_options(lists: &[ListInfo]) -> Vec<SettingOption> {
    lists
        .iter()
        .map(|list| SettingOption {
            key: list.id.clone(),
            text: list.title.clone(),
        })
        .collect()
}

/// Options for the status-field dropdown, keyed by internal name.
#[must_use]
pub fn status_field_options(
    lists: &[ListInfo],
    selected_list_id: Option<&str>,
) -> Vec<SettingOption> {
    available_status_fields(lists, selected_list_id)
        .into_iter()
        .map(|field| SettingOption {
            key: field.internal_name.clone(),
            text: field.title.clone(),
        })
        .collect()
}
