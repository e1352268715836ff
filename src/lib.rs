//! # fleetadmin - fleet drivers administration TUI
//!
//! A terminal client for the drivers registry of a fleet API, built with
//! Ratatui. State management follows the Elm architecture:
//!
//! - **Model** ([`core::state`]): the application state, one slice per concern
//! - **Message** ([`core::msg`]): everything that can change the state
//! - **Update** ([`core::update::update`]): pure `(msg, state) -> (state, cmds)`
//! - **Command** ([`core::cmd`]): side effects, performed by
//!   [`core::cmd_executor::CmdExecutor`] whose results come back as messages
//! - **View** ([`presentation::components`]): stateless rendering of a snapshot
//!
//! ## Example Usage
//!
//! ```rust
//! use fleetadmin::core::{
//!     cmd::Cmd,
//!     msg::{nav::NavMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! // Mounting the drivers screen starts a fetch and the progress ticker.
//! let (state, commands) = update(Msg::Nav(NavMsg::ShowDrivers), AppState::default());
//!
//! assert!(state.is_loading());
//! assert!(commands
//!     .iter()
//!     .any(|cmd| matches!(cmd, Cmd::FetchDrivers { .. })));
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Drivers, columns, profile drafts and routes
//! - [`core`] - State, messages, update and command execution
//! - [`infrastructure`] - HTTP API, clipboard, config, CLI and terminal
//! - [`integration`] - Runtime and the main loop
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

pub type Result<T> = color_eyre::eyre::Result<T>;
