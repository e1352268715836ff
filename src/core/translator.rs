use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::config::keybindings::{Action, Mode};
use crate::core::{
    msg::{nav::NavMsg, system::SystemMsg, table::TableMsg, ui::UiMsg, Msg},
    raw_msg::RawMsg,
    state::{table::PageDirection, ui::UiMode, AppState, Screen},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Binding set for the current screen and overlay
pub fn binding_mode(state: &AppState) -> Mode {
    match state.screen {
        Screen::DriverDetail { .. } => Mode::Detail,
        Screen::Drivers => match state.ui.mode {
            UiMode::Table => Mode::Table,
            UiMode::GlobalFilter | UiMode::ColumnFilter(_) => Mode::Input,
            UiMode::ColumnMenu | UiMode::ActionMenu(_) => Mode::Menu,
            UiMode::CreateModal => Mode::Modal,
        },
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl-C always quits, whatever has focus
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    let mode = binding_mode(state);
    let action = state.config.keybindings.action(mode, key);

    // The table is not interactive until loading has finished
    if state.is_loading() {
        return match action {
            Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
            Some(Action::Suspend) => vec![Msg::System(SystemMsg::Suspend)],
            _ => vec![],
        };
    }

    match (action, mode) {
        (Some(action), _) => translate_action_to_msg(action, state),
        // Unbound keys edit the active text input
        (None, Mode::Input | Mode::Modal) => vec![Msg::Ui(UiMsg::InputKey(key))],
        (None, _) => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::CursorUp => vec![Msg::Table(TableMsg::CursorUp)],
        Action::CursorDown => vec![Msg::Table(TableMsg::CursorDown)],
        Action::PreviousPage => vec![Msg::Table(TableMsg::Page(PageDirection::Previous))],
        Action::NextPage => vec![Msg::Table(TableMsg::Page(PageDirection::Next))],
        Action::FocusNextColumn => vec![Msg::Table(TableMsg::FocusNextColumn)],
        Action::FocusPreviousColumn => vec![Msg::Table(TableMsg::FocusPreviousColumn)],

        Action::ToggleSort => vec![Msg::Table(TableMsg::ToggleSortFocused { multi: false })],
        Action::AddSort => vec![Msg::Table(TableMsg::ToggleSortFocused { multi: true })],
        Action::ClearSort => vec![Msg::Table(TableMsg::ClearSort)],
        Action::EditGlobalFilter => vec![Msg::Ui(UiMsg::EditGlobalFilter)],
        Action::EditColumnFilter => vec![Msg::Ui(UiMsg::EditColumnFilter)],
        Action::ToggleRowSelection => vec![Msg::Table(TableMsg::ToggleRowSelection)],
        Action::ToggleSelectAll => vec![Msg::Table(TableMsg::ToggleSelectAll)],

        Action::OpenColumnMenu => vec![Msg::Ui(UiMsg::OpenColumnMenu)],
        Action::OpenActionMenu => translate_action_menu_key(state),
        Action::OpenCreateModal => vec![Msg::Ui(UiMsg::OpenCreateModal)],
        Action::Refresh => vec![Msg::Nav(NavMsg::ShowDrivers)],
        Action::MenuUp => vec![Msg::Ui(UiMsg::MenuUp)],
        Action::MenuDown => vec![Msg::Ui(UiMsg::MenuDown)],
        Action::MenuActivate => vec![Msg::Ui(UiMsg::MenuActivate)],
        Action::Close => vec![Msg::Ui(UiMsg::Close)],

        Action::Back => vec![Msg::Nav(NavMsg::Back)],
        Action::CopyDriverId => match &state.screen {
            Screen::DriverDetail { id } => vec![Msg::Ui(UiMsg::CopyDriverId(id.clone()))],
            Screen::Drivers => vec![],
        },

        Action::Submit => vec![Msg::Ui(UiMsg::SubmitDraft)],
        Action::NextField => vec![Msg::Ui(UiMsg::NextField)],
        Action::PreviousField => vec![Msg::Ui(UiMsg::PreviousField)],
    }
}

/// Translate the action menu key with validation
fn translate_action_menu_key(state: &AppState) -> Vec<Msg> {
    if state.table.cursor_driver().is_none() {
        return vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "No driver under the cursor".to_string(),
        ))];
    }
    vec![Msg::Ui(UiMsg::OpenActionMenu)]
}
