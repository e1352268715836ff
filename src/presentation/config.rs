//! Per-mode key maps and the named style table, both read from `config.json5`.

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::Styles;
