use crate::core::state::input::InputState;
use crate::domain::{
    column::ColumnId,
    profile::{DraftField, ProfileDraft},
};

/// Entries of the per-row action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    CopyDriverId,
    ViewDriverDetails,
}

impl RowAction {
    pub const ALL: [RowAction; 2] = [RowAction::CopyDriverId, RowAction::ViewDriverDetails];

    pub fn label(self) -> &'static str {
        match self {
            RowAction::CopyDriverId => "Copy Driver ID",
            RowAction::ViewDriverDetails => "View Driver Details",
        }
    }
}

/// What receives keyboard input on the drivers screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Table,
    GlobalFilter,
    ColumnFilter(ColumnId),
    ColumnMenu,
    /// Action menu for the driver with this id
    ActionMenu(String),
    CreateModal,
}

/// Creation modal: the draft plus the field being edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftForm {
    pub draft: ProfileDraft,
    pub field: DraftField,
    pub input: InputState,
    pub submitting: bool,
    /// Id of the in-flight create request, when `submitting`
    pub submission: u64,
}

impl DraftForm {
    pub fn focus(&mut self, field: DraftField) {
        self.field = field;
        self.input = InputState::with_content(self.draft.get(field));
    }

    /// Writes the input back into the focused draft field.
    pub fn sync(&mut self) {
        self.draft.set(self.field, self.input.content.clone());
    }
}

/// UI-related state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub mode: UiMode,
    pub input: InputState,
    pub menu_cursor: usize,
    /// Present while the creation modal is open
    pub form: Option<DraftForm>,
    /// Last id handed to a create request
    pub last_submission: u64,
}

impl UiState {
    pub fn is_table(&self) -> bool {
        self.mode == UiMode::Table
    }

    pub fn is_editing_filter(&self) -> bool {
        matches!(self.mode, UiMode::GlobalFilter | UiMode::ColumnFilter(_))
    }

    pub fn is_menu(&self) -> bool {
        matches!(self.mode, UiMode::ColumnMenu | UiMode::ActionMenu(_))
    }

    pub fn is_modal(&self) -> bool {
        self.mode == UiMode::CreateModal
    }

    pub fn open(&mut self, mode: UiMode) {
        self.mode = mode;
        self.menu_cursor = 0;
    }

    /// Back to the table; the creation draft is discarded.
    pub fn close(&mut self) {
        self.mode = UiMode::Table;
        self.menu_cursor = 0;
        self.input = InputState::default();
        self.form = None;
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self, len: usize) {
        if self.menu_cursor + 1 < len {
            self.menu_cursor += 1;
        }
    }
}
