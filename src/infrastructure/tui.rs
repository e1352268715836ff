//! Terminal abstraction
//!
//! [`TuiLike`] is what the runner needs from a terminal. [`real::RealTui`]
//! drives crossterm; [`test::TestTui`] draws into a `TestBackend` so screens
//! can be asserted on.

pub mod event_source;
pub mod real;

use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

pub type IO = std::io::Stdout;

pub fn io() -> IO {
    std::io::stdout()
}

pub type Frame<'a> = ratatui::Frame<'a>;

/// Terminal input plus the tick and render heartbeats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;

    fn exit(&mut self) -> Result<()>;

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;

    fn resize(&mut self, area: Rect) -> Result<()>;

    /// Next event, or `None` once the terminal is gone.
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;

    /// Hands the terminal back to the shell (job control). Terminals that
    /// cannot suspend ignore it.
    fn suspend(&mut self) -> Result<()> {
        Ok(())
    }
}
