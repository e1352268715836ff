//! Integration layer
//!
//! Connects the pure core to the outside: the [`runtime::Runtime`] owns the
//! state and message queues, and the [`app_runner::AppRunner`] drives it from
//! terminal events and draws each snapshot.

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
