//! List and field metadata as reported by the record store.

use super::Status;
use serde::{Deserialize, Serialize};

/// Field type name marking an enumerated field with declared choices.
pub const CHOICE_FIELD_TYPE: &str = "Choice";

/// Metadata describing a single list field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldInfo {
    /// Display title.
    pub title: String,
    /// Stable internal name used when reading and writing item values.
    pub internal_name: String,
    /// Store-specific type name, e.g. `Choice` or `Text`.
    pub type_as_string: String,
    /// Declared values for enumerated fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl FieldInfo {
    /// Creates field metadata without declared choices.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        internal_name: impl Into<String>,
        type_as_string: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            internal_name: internal_name.into(),
            type_as_string: type_as_string.into(),
            choices: None,
        }
    }

    /// Creates a `Choice` field declaring `choices`.
    #[must_use]
    pub fn choice<I, S>(title: impl Into<String>, internal_name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: Some(choices.into_iter().map(Into::into).collect()),
            ..Self::new(title, internal_name, CHOICE_FIELD_TYPE)
        }
    }

    /// Returns `true` when the field can act as a status source.
    #[must_use]
    pub fn is_choice(&self) -> bool {
        self.type_as_string == CHOICE_FIELD_TYPE
    }

    /// Returns the declared choices as ordered statuses, empty when absent.
    #[must_use]
    pub fn declared_statuses(&self) -> Vec<Status> {
        self.choices
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|choice| Status::new(choice.as_str()))
            .collect()
    }
}

/// Metadata describing a list and its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInfo {
    /// List identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
}

impl ListInfo {
    /// Creates list metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: Vec<FieldInfo>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
        }
    }

    /// Finds a field by internal name, falling back to its title.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields
            .iter()
            .find(|field| field.internal_name == name)
            .or_else(|| self.fields.iter().find(|field| field.title == name))
    }
}
