use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Messages specific to UiState (overlays, text inputs, creation modal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    // Filter inputs
    EditGlobalFilter,
    EditColumnFilter,
    InputKey(KeyEvent),

    // Menus
    OpenColumnMenu,
    OpenActionMenu,
    MenuUp,
    MenuDown,
    MenuActivate,
    CopyDriverId(String),

    // Creation modal
    OpenCreateModal,
    NextField,
    PreviousField,
    SubmitDraft,
    /// Reply to the `CreateDriver` request tagged `submission`
    DraftSubmitted {
        submission: u64,
        outcome: Result<(), String>,
    },

    // Leave the current overlay or input
    Close,
}
