use serde::{Deserialize, Serialize};

/// Messages of the auth slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMsg {
    /// The API rejected the token
    Expired,
}
