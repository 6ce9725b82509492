//! Clipboard port

use thiserror::Error;

/// Errors that can occur writing to the platform clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard is available in this context (headless session,
    /// missing display server, denied access)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// A clipboard exists but the write was rejected
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Platform write-text-to-clipboard capability
///
/// Intentionally synchronous: the write happens on the event loop in
/// direct response to a key press, and the platform APIs are blocking.
/// Failures are surfaced to the caller as a transient notice and never
/// touch the session's lifecycle state.
pub trait ClipboardPort: Send + Sync {
    /// Write `text` verbatim to the clipboard
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
