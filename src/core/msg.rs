use serde::{Deserialize, Serialize};

pub mod loading;
pub mod nav;
pub mod session;
pub mod system;
pub mod table;
pub mod ui;

use loading::LoadingMsg;
use nav::NavMsg;
use session::SessionMsg;
use system::SystemMsg;
use table::TableMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function; raw terminal input is
/// translated into them first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Table view model operations (delegated to TableState)
    Table(TableMsg),

    // Fetch and progress lifecycle of the drivers screen
    Loading(LoadingMsg),

    // Overlays, inputs and the creation modal
    Ui(UiMsg),

    // Screen transitions
    Nav(NavMsg),

    // Auth slice
    Session(SessionMsg),
}

impl Msg {
    /// Helper to exclude frequent messages from debug logging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Loading(LoadingMsg::ProgressTick { .. }))
    }

    /// Debug-log form of the message. Keys typed into an input are reduced
    /// to a placeholder since they may be password characters.
    pub fn log_summary(&self) -> String {
        match self {
            Msg::Ui(UiMsg::InputKey(_)) => "Ui(InputKey(..))".to_string(),
            other => format!("{other:?}"),
        }
    }
}
