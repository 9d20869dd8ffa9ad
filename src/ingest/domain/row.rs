//! Decoded spreadsheet rows and the row-to-draft mapper.

use super::RowError;
use crate::identity::UserId;
use crate::todo::domain::TodoDraft;
use std::collections::HashMap;

/// Header label of the task-text column. Lookups are case-sensitive.
pub const TASK_NAME_HEADER: &str = "Todo Name";

/// Header label of the completion column. Lookups are case-sensitive.
pub const STATUS_HEADER: &str = "Status";

/// One decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A textual cell.
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// A boolean cell.
    Bool(bool),
    /// An empty or unreadable cell.
    Empty,
}

impl CellValue {
    /// Interprets the cell as a completion flag.
    ///
    /// Mirrors the truthiness of the upstream system: booleans pass through,
    /// zero numbers and empty text are false, anything else is true. Note a
    /// textual `"false"` is therefore true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0,
            Self::Text(value) => !value.is_empty(),
            Self::Empty => false,
        }
    }

    /// Renders the cell as trimmed task text.
    ///
    /// Returns `None` for empty cells and whitespace-only text. Numbers
    /// render in their shortest decimal form.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            }
            Self::Number(value) => Some(value.to_string()),
            Self::Bool(value) => Some(value.to_string()),
            Self::Empty => None,
        }
    }
}

/// One decoded record from an uploaded spreadsheet, keyed by header label.
///
/// Cells that were empty in the sheet are omitted entirely, matching the
/// row-to-object decoding of the upstream system.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    index: usize,
    fields: HashMap<String, CellValue>,
}

impl SheetRow {
    /// Builds a row from header-labelled cells.
    ///
    /// `index` is the 1-based data-row ordinal; the header row is not
    /// counted.
    #[must_use]
    pub fn new(index: usize, fields: impl IntoIterator<Item = (String, CellValue)>) -> Self {
        Self {
            index,
            fields: fields.into_iter().collect(),
        }
    }

    /// Returns the 1-based data-row ordinal.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Looks up a cell by header label. Exact, case-sensitive match.
    #[must_use]
    pub fn field(&self, label: &str) -> Option<&CellValue> {
        self.fields.get(label)
    }
}

/// Maps one spreadsheet row to a validated todo draft.
///
/// Pure: no side effects, no I/O. A missing or falsy `"Status"` cell maps to
/// not-completed; that is an explicit default, not an error.
///
/// # Errors
///
/// Returns [`RowError::MissingTaskName`] when the `"Todo Name"` cell is
/// absent or renders to empty text. This counts as a failing row and aborts
/// the job that is processing it.
pub fn map_row(row: &SheetRow, user_id: &UserId) -> Result<TodoDraft, RowError> {
    let task = row
        .field(TASK_NAME_HEADER)
        .and_then(CellValue::as_text)
        .ok_or(RowError::MissingTaskName { row: row.index() })?;
    let is_completed = row.field(STATUS_HEADER).is_some_and(CellValue::is_truthy);
    TodoDraft::new(task, is_completed, user_id.clone())
        .map_err(|_| RowError::MissingTaskName { row: row.index() })
}
