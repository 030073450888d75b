//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The list identifier is empty after trimming.
    #[error("list identifier must not be empty")]
    EmptyListId,

    /// The field name is empty after trimming.
    #[error("field name must not be empty")]
    EmptyFieldName,
}

/// The board cannot load because required settings are absent.
///
/// This is an expected precondition rather than a fault: the consuming UI
/// shows [`super::CONFIGURE_PROMPT`] instead of a board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("board configuration is missing: {}", .missing.join(", "))]
pub struct ConfigurationMissing {
    /// Names of the settings that were absent or blank.
    pub missing: Vec<&'static str>,
}
