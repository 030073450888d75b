//! Responsive column layout on a fixed-width grid.

use serde::Serialize;
use tracing::{debug, warn};

/// Number of grid units in a full board row.
pub const LAYOUT_MAX_COLUMNS: u32 = 12;

/// Width assignment shared by every column of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnLayout {
    /// No width is forced; the host lays the columns out itself.
    Unsized,
    /// Each column occupies `span` of `of` grid units.
    Span {
        /// Units per column.
        span: u32,
        /// Units in the full row.
        of: u32,
    },
}

impl ColumnLayout {
    /// Returns the per-column span, if one is forced.
    #[must_use]
    pub const fn span(self) -> Option<u32> {
        match self {
            Self::Unsized => None,
            Self::Span { span, .. } => Some(span),
        }
    }

    /// Returns the grid utility class for a column, e.g. `ms-u-sm4`.
    #[must_use]
    pub fn grid_class(self) -> Option<String> {
        self.span().map(|span| format!("ms-u-sm{span}"))
    }
}

/// Computes the column layout for `columns_count` columns on a grid of
/// `max_columns` units.
///
/// Counts below one or above `max_columns` produce [`ColumnLayout::Unsized`]
/// and a warning. The span is `max_columns / columns_count` rounded down;
/// leftover units stay empty.
#[must_use]
pub fn compute_layout(columns_count: i64, max_columns: u32) -> ColumnLayout {
    let count = match u32::try_from(columns_count) {
        Ok(count) if count >= 1 => count,
        _ => {
            warn!(columns_count, "invalid number of columns");
            return ColumnLayout::Unsized;
        }
    };

    if count > max_columns {
        warn!(columns_count, max_columns, "too many columns for responsive UI");
        return ColumnLayout::Unsized;
    }

    let span = max_columns
        .checked_div(count)
        .filter(|span| *span > 0)
        .unwrap_or(1);
    debug!(columns_count, span, "computed column span");
    ColumnLayout::Span {
        span,
        of: max_columns,
    }
}

/// Computes the layout on the standard [`LAYOUT_MAX_COLUMNS`]-unit grid.
#[must_use]
pub fn compute_default_layout(columns_count: i64) -> ColumnLayout {
    compute_layout(columns_count, LAYOUT_MAX_COLUMNS)
}
