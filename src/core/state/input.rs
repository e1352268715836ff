use crossterm::event::KeyEvent;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input kept as plain data
///
/// Key handling is delegated to tui-textarea: a temporary TextArea is rebuilt
/// from this state, fed the key, and read back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    pub content: String,
    /// Cursor column in characters
    pub cursor: usize,
}

impl InputState {
    /// Input prefilled with `content`, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn apply_key(&mut self, key: KeyEvent) {
        let mut textarea = TextArea::default();
        if !self.content.is_empty() {
            textarea.insert_str(&self.content);
        }
        textarea.move_cursor(CursorMove::Jump(
            0,
            u16::try_from(self.cursor).unwrap_or(u16::MAX),
        ));

        textarea.input(key);

        // Newlines are not part of a single-line input.
        self.content = textarea.lines().join("");
        let (row, column) = textarea.cursor();
        self.cursor = if row == 0 {
            column
        } else {
            self.content.chars().count()
        };
    }
}
