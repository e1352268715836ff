use crate::core::{cmd::Cmd, msg::session::SessionMsg};

/// Auth slice of the store
///
/// The token itself lives in the API client; this only tracks whether the
/// server still accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub has_token: bool,
    pub expired: bool,
}

impl SessionState {
    pub fn new(has_token: bool) -> Self {
        Self {
            has_token,
            expired: false,
        }
    }

    pub fn update(&mut self, msg: SessionMsg) -> Vec<Cmd> {
        match msg {
            SessionMsg::Expired => {
                if !self.expired {
                    log::warn!("API rejected the session token");
                }
                self.expired = true;
            }
        }
        vec![]
    }

    pub fn label(&self) -> &'static str {
        match (self.has_token, self.expired) {
            (_, true) => "session expired",
            (true, false) => "signed in",
            (false, false) => "anonymous",
        }
    }
}
