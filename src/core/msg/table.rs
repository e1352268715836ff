use serde::{Deserialize, Serialize};

use crate::core::state::table::{PageDirection, SortKey};
use crate::domain::column::ColumnId;

/// Messages specific to TableState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableMsg {
    // Sorting
    SetSort(Vec<SortKey>),
    ToggleSort { column: ColumnId, multi: bool },
    ToggleSortFocused { multi: bool },
    ClearSort,

    // Filtering
    SetColumnFilter { column: ColumnId, value: String },
    SetGlobalFilter(String),

    // Column visibility
    SetColumnVisibility { column: ColumnId, visible: bool },
    ToggleColumnVisibility(ColumnId),

    // Paging
    Page(PageDirection),

    // Selection
    SetRowSelection(Vec<String>),
    ToggleRowSelection,
    ToggleSelectAll,

    // Cursor and focus
    CursorUp,
    CursorDown,
    FocusNextColumn,
    FocusPreviousColumn,
}
