use serde::{Deserialize, Serialize};

use crate::domain::profile::ProfileDraft;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network, timers, clipboard). Results come back
/// to the update function as messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Remote data source
    FetchDrivers {
        generation: u64,
    },
    CreateDriver {
        submission: u64,
        draft: ProfileDraft,
    },

    // Progress simulator ticker
    StartProgress {
        generation: u64,
        interval_ms: u64,
        ticks: u32,
    },
    CancelProgress,

    // Clipboard (best effort)
    CopyToClipboard {
        text: String,
    },

    // UI-related commands
    Tui(TuiCommand),
}

impl Cmd {
    /// Whether the command spawns a background task
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchDrivers { .. } | Cmd::CreateDriver { .. } | Cmd::StartProgress { .. } => {
                true
            }
            Cmd::CancelProgress | Cmd::CopyToClipboard { .. } | Cmd::Tui(..) => false,
        }
    }
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdResult {
    /// Executed inline
    Done,
    /// Running on a background task; results arrive as messages
    Spawned,
}
