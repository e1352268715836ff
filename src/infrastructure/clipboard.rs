use std::sync::Mutex;

use arboard::Clipboard;
use color_eyre::eyre::{eyre, Result};

/// Destination of "Copy Driver ID"
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard through arboard.
///
/// The handle is opened on first use; headless sessions without a clipboard
/// only fail when something is actually copied.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Mutex<Option<Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|_| eyre!("clipboard lock poisoned"))?;
        if guard.is_none() {
            *guard = Some(Clipboard::new()?);
        }
        match guard.as_mut() {
            Some(clipboard) => {
                clipboard.set_text(text.to_owned())?;
                log::trace!("Copied {} bytes to clipboard", text.len());
                Ok(())
            }
            None => Err(eyre!("clipboard unavailable")),
        }
    }
}

/// In-memory clipboard for tests
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, oldest first
    pub fn contents(&self) -> Vec<String> {
        self.contents
            .lock()
            .map(|contents| contents.clone())
            .unwrap_or_default()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        self.contents
            .lock()
            .map_err(|_| eyre!("clipboard lock poisoned"))?
            .push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records_writes() -> Result<()> {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("d-1")?;
        clipboard.write_text("d-2")?;
        assert_eq!(clipboard.contents(), vec!["d-1", "d-2"]);
        Ok(())
    }
}
