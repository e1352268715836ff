use serde::{Deserialize, Serialize};

/// Screen transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    /// Mount (or remount) the drivers screen, which starts a fresh load
    ShowDrivers,
    /// Show `/admin/driver/{id}`; the id is not validated
    ShowDriverDetail(String),
    /// Leave the detail screen
    Back,
}
