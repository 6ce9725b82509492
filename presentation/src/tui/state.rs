//! TUI state
//!
//! Single source of truth for everything the TUI renders beyond the
//! session itself: focus, the input edit buffer, flash notices, and the
//! spinner frame. The buffer is mirrored into the session on every edit;
//! the session stays the authority on lifecycle state.

use std::time::{Duration, Instant};

/// How long a transient flash notice stays visible
const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Which pane receives editing keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusArea {
    #[default]
    Input,
    Length,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            FocusArea::Input => FocusArea::Length,
            FocusArea::Length => FocusArea::Input,
        }
    }
}

/// Central TUI state — owned by the TuiApp select! loop
pub struct TuiState {
    // -- Focus --
    pub focus: FocusArea,

    // -- Input buffer (byte-offset cursor over UTF-8) --
    pub input: String,
    pub cursor: usize,

    // -- Overlay --
    pub flash_message: Option<(String, Instant)>,

    // -- Spinner --
    pub spinner_frame: usize,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            focus: FocusArea::default(),
            input: String::new(),
            cursor: 0,
            flash_message: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a newline at the current cursor position
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev_char_len = self.input[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input.remove(self.cursor - prev_char_len);
            self.cursor -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev_char_len = self.input[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            let next_char_len = self.input[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.input.len();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    // -- Flash notices --

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    /// The current flash notice, if it hasn't expired yet
    pub fn flash(&self) -> Option<&str> {
        self.flash_message
            .as_ref()
            .filter(|(_, shown_at)| shown_at.elapsed() < FLASH_DURATION)
            .map(|(message, _)| message.as_str())
    }

    // -- Tick --

    /// Advance the spinner and drop expired flash notices
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if let Some((_, shown_at)) = &self.flash_message
            && shown_at.elapsed() >= FLASH_DURATION
        {
            self.flash_message = None;
        }
    }
}
