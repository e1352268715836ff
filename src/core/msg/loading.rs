use serde::{Deserialize, Serialize};

use crate::domain::driver::Driver;

/// How a drivers fetch ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchOutcome {
    Loaded(Vec<Driver>),
    Failed { message: String, unauthorized: bool },
}

/// Messages of the drivers screen loading lifecycle.
/// Results carry the generation of the mount that requested them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadingMsg {
    ProgressTick { generation: u64 },
    FetchSettled { generation: u64, outcome: FetchOutcome },
}
