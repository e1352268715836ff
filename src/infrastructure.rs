//! Infrastructure layer
//!
//! Everything that talks to the outside world:
//! - HTTP client for the fleet API
//! - System clipboard
//! - CLI arguments and layered configuration
//! - Terminal (real and test backends)

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod tui;
