//! Externally supplied board settings.

use super::{BoardDomainError, ConfigurationMissing, FieldName, ListId};
use serde::{Deserialize, Serialize};

/// Text the consuming UI shows instead of a board when settings are absent.
pub const CONFIGURE_PROMPT: &str = "Please configure the WebPart";

/// Raw board settings as edited in the host's settings UI.
///
/// Both values are optional because the host persists whatever the user has
/// picked so far. Blank strings count as absent.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::BoardConfig;
///
/// let config = BoardConfig::new("tasks", "Status");
/// let target = config.resolve().expect("both settings are present");
/// assert_eq!(target.list_id().as_str(), "tasks");
///
/// assert!(BoardConfig::default().resolve().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    /// Identifier of the list holding the tasks.
    #[serde(default)]
    pub tasks_list_id: Option<String>,
    /// Internal name of the `Choice` field holding each task's status.
    #[serde(default)]
    pub status_field_name: Option<String>,
}

impl BoardConfig {
    /// Creates a fully populated configuration.
    #[must_use]
    pub fn new(tasks_list_id: impl Into<String>, status_field_name: impl Into<String>) -> Self {
        Self {
            tasks_list_id: Some(tasks_list_id.into()),
            status_field_name: Some(status_field_name.into()),
        }
    }

    /// Validates the settings into a load target.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationMissing`] naming every absent or blank setting.
    pub fn resolve(&self) -> Result<BoardTarget, ConfigurationMissing> {
        let list_id = self.tasks_list_id.as_deref().map(ListId::new);
        let status_field = self.status_field_name.as_deref().map(FieldName::new);

        match (list_id, status_field) {
            (Some(Ok(list_id)), Some(Ok(status_field))) => Ok(BoardTarget {
                list_id,
                status_field,
            }),
            (list_id, status_field) => {
                let mut missing = Vec::new();
                if !matches!(list_id, Some(Ok(_))) {
                    missing.push("tasksListId");
                }
                if !matches!(status_field, Some(Ok(_))) {
                    missing.push("statusFieldName");
                }
                Err(ConfigurationMissing { missing })
            }
        }
    }
}

/// Validated location of a board's data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardTarget {
    list_id: ListId,
    status_field: FieldName,
}

impl BoardTarget {
    /// Creates a target from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when either value is blank.
    pub fn new(
        list_id: impl Into<String>,
        status_field: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            list_id: ListId::new(list_id)?,
            status_field: FieldName::new(status_field)?,
        })
    }

    /// Returns the tasks list identifier.
    #[must_use]
    pub const fn list_id(&self) -> &ListId {
        &self.list_id
    }

    /// Returns the status field name.
    ///
    /// Once a board is loaded this is the field's internal name, whichever
    /// name the configuration used.
    #[must_use]
    pub const fn status_field(&self) -> &FieldName {
        &self.status_field
    }

    /// Returns the same list with `status_field` as its status field.
    #[must_use]
    pub fn with_status_field(&self, status_field: FieldName) -> Self {
        Self {
            list_id: self.list_id.clone(),
            status_field,
        }
    }
}
