//! TUI application — single-page summarizer loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                  request task (tokio::spawn)
//!   ├─ crossterm EventStream               └─ gateway call + floor sleep
//!   ├─ settled_rx (SubmissionSettled) <─────────┘
//!   └─ tick_interval (spinner frames, flash expiry)
//! ```
//!
//! All session mutations happen on this loop; the request task only ever
//! sends a settled message back. Keyboard input keeps working while a
//! request is pending; edits are recorded but never touch the in-flight
//! payload.

use super::event::{AppAction, map_key};
use super::render;
use super::state::TuiState;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use summarizer_application::{
    ClipboardPort, CopyFeedback, DiagnosticsLogger, LifecycleParams, SessionController,
    SubmissionSettled, SummarizerGateway,
};
use summarizer_domain::{Phase, SummaryLength};
use tokio::sync::mpsc;

/// Main TUI application
pub struct TuiApp {
    controller: SessionController,
    settled_rx: mpsc::UnboundedReceiver<SubmissionSettled>,
    state: TuiState,
}

impl TuiApp {
    /// Create a new TUI application wired to a fresh session controller
    pub fn new(
        gateway: Arc<dyn SummarizerGateway>,
        clipboard: Arc<dyn ClipboardPort>,
        diagnostics: Arc<dyn DiagnosticsLogger>,
        params: LifecycleParams,
        target_length: SummaryLength,
    ) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let controller = SessionController::new(gateway, clipboard, params, settled_tx)
            .with_diagnostics(diagnostics)
            .with_target_length(target_length);

        Self {
            controller,
            settled_rx,
            state: TuiState::new(),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| {
                render::draw(frame, &self.state, self.controller.session());
            })?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // Settled submissions from the request task
                Some(settled) = self.settled_rx.recv() => {
                    self.controller.resolve(settled);
                }

                // Spinner frames and flash expiry
                _ = tick.tick() => {
                    self.state.tick();
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.apply_action(map_key(key, self.state.focus));
    }

    fn apply_action(&mut self, action: AppAction) {
        match action {
            AppAction::None => {}
            AppAction::Quit => self.state.should_quit = true,
            AppAction::Escape => {
                // Dismissing the error panel is the same as clearing
                if self.controller.session().phase() == Phase::Failed {
                    self.clear();
                } else {
                    self.state.should_quit = true;
                }
            }
            AppAction::Submit => self.controller.submit(),
            AppAction::CopyResult => match self.controller.copy_result() {
                Some(CopyFeedback::Copied) => self.state.set_flash("Copied to clipboard!"),
                Some(CopyFeedback::Failed) => self.state.set_flash("Failed to copy."),
                None => {}
            },
            AppAction::Clear => self.clear(),
            AppAction::FocusNext => self.state.focus = self.state.focus.next(),
            AppAction::LengthUp => {
                let length = self.controller.session().target_length().increment();
                self.controller.set_target_length(length);
            }
            AppAction::LengthDown => {
                let length = self.controller.session().target_length().decrement();
                self.controller.set_target_length(length);
            }
            AppAction::InsertChar(c) => {
                self.state.insert_char(c);
                self.sync_input();
            }
            AppAction::InsertNewline => {
                self.state.insert_newline();
                self.sync_input();
            }
            AppAction::Backspace => {
                self.state.delete_char();
                self.sync_input();
            }
            AppAction::CursorLeft => self.state.cursor_left(),
            AppAction::CursorRight => self.state.cursor_right(),
            AppAction::CursorHome => self.state.cursor_home(),
            AppAction::CursorEnd => self.state.cursor_end(),
        }
    }

    /// Mirror the edit buffer into the controller. The controller records
    /// every edit; a dispatched request keeps the payload captured at
    /// submit time.
    fn sync_input(&mut self) {
        self.controller.set_input_text(self.state.input.clone());
    }

    fn clear(&mut self) {
        self.controller.reset();
        self.state.clear_input();
    }
}
