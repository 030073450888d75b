//! Task cards and their status labels.

use super::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status label of a card; one per board column.
///
/// Labels are compared verbatim. The empty label never matches a declared
/// choice, so a task loaded without a status value lands in no column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    /// Creates a status label.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Status {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: ItemId,
    title: String,
    status: Status,
}

impl Task {
    /// Creates a task.
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>, status: impl Into<Status>) -> Self {
        Self {
            id,
            title: title.into(),
            status: status.into(),
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status label.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns a copy of this task carrying `status`.
    #[must_use]
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
