//! Application core: everything that decides what happens, none of what does it.
//!
//! Key presses arrive as [`raw_msg::RawMsg`], [`translator`] turns them into
//! [`msg::Msg`] for the current input mode, and [`update::update`] folds each
//! message into [`state::AppState`], returning [`cmd::Cmd`] values for
//! [`cmd_executor`] to run.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
