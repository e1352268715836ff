//! Presentation layer
//!
//! Stateless components drawing the state snapshot, reusable widgets, and the
//! user-facing configuration (keybindings, styles).

pub mod components;
pub mod config;
pub mod widgets;
