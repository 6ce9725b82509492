//! Presentation layer for text-summarizer
//!
//! This crate contains CLI definitions, the single-page TUI, output
//! formatters, and the one-shot progress spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::OneShotSpinner;
pub use tui::app::TuiApp;
