use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Process lifecycle flags and the one-line message under the status bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => self.should_quit = true,
            SystemMsg::Suspend => self.should_suspend = true,
            SystemMsg::Resume => self.should_suspend = false,
            SystemMsg::Resize(width, height) => {
                return vec![Cmd::Tui(TuiCommand::Resize { width, height })];
            }
            SystemMsg::UpdateStatusMessage(message) => self.status_message = Some(message),
            SystemMsg::ClearStatusMessage => self.status_message = None,
            SystemMsg::ShowError(error) => self.status_message = Some(format!("Error: {error}")),
        }
        vec![]
    }
}
