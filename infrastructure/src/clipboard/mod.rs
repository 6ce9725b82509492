//! System clipboard adapter

use summarizer_application::ports::clipboard::{ClipboardError, ClipboardPort};

/// Clipboard adapter backed by the platform clipboard.
///
/// The arboard handle is opened per write rather than held: on X11 a
/// long-lived handle owns the selection and holding it for the process
/// lifetime interferes with other applications.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
