//! Progress spinner for one-shot execution

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while a one-shot request is in flight
pub struct OneShotSpinner {
    bar: ProgressBar,
}

impl OneShotSpinner {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message("Summarizing...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self {
            bar,
        }
    }

    /// Stop the spinner and erase it from the terminal
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
