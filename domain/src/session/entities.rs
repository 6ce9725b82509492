//! Session domain entity

use super::generation::Generation;
use super::phase::Phase;
use crate::core::summary_length::SummaryLength;

/// A summarization session (Entity)
///
/// Owns the user's input text, the desired summary length, and the
/// lifecycle state of the current submission. All mutation goes through
/// the methods below, which keep the phase invariants intact:
///
/// - `Ready` implies a summary is present and no error message is set
/// - `Failed` implies an error message is present and no summary is set
/// - `Pending` is exclusive: a new submission cannot begin while one is
///   outstanding
///
/// A session is created once per UI mount and lives until the process
/// exits; [`Session::reset`] returns it to the initial state without
/// recreating it.
#[derive(Debug, Clone)]
pub struct Session {
    input_text: String,
    target_length: SummaryLength,
    summary: Option<String>,
    error_message: Option<String>,
    phase: Phase,
    generation: Generation,
}

impl Session {
    pub fn new() -> Self {
        Self::with_target_length(SummaryLength::default())
    }

    /// Create a session with a preconfigured summary length
    pub fn with_target_length(target_length: SummaryLength) -> Self {
        Self {
            input_text: String::new(),
            target_length,
            summary: None,
            error_message: None,
            phase: Phase::Idle,
            generation: Generation::default(),
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn target_length(&self) -> SummaryLength {
        self.target_length
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Record edited input text. Never triggers a request; an in-flight
    /// request keeps the payload captured at submit time.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn set_target_length(&mut self, length: SummaryLength) {
        self.target_length = length;
    }

    /// Whether a submission may start: non-blank input and no request
    /// outstanding
    pub fn can_submit(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.phase.is_pending()
    }

    /// Begin a submission attempt.
    ///
    /// Clears any previous summary and error, moves to `Pending`, and
    /// advances the generation. Returns the generation the dispatched
    /// request must carry, or `None` if the input is blank or a request is
    /// already outstanding (in which case nothing changes).
    pub fn begin_submission(&mut self) -> Option<Generation> {
        if !self.can_submit() {
            return None;
        }
        self.summary = None;
        self.error_message = None;
        self.phase = Phase::Pending;
        self.generation = self.generation.next();
        Some(self.generation)
    }

    /// Record a successful completion for `generation`.
    ///
    /// A completion whose generation no longer matches the session's is
    /// stale and is discarded. Returns whether the completion was applied.
    pub fn complete_success(
        &mut self,
        generation: Generation,
        summary: impl Into<String>,
    ) -> bool {
        if generation != self.generation || !self.phase.is_pending() {
            return false;
        }
        self.summary = Some(summary.into());
        self.error_message = None;
        self.phase = Phase::Ready;
        true
    }

    /// Record a failed completion for `generation`.
    ///
    /// `message` is the user-safe text to show, never the raw transport
    /// error. Stale completions are discarded as in
    /// [`Session::complete_success`].
    pub fn complete_failure(
        &mut self,
        generation: Generation,
        message: impl Into<String>,
    ) -> bool {
        if generation != self.generation || !self.phase.is_pending() {
            return false;
        }
        self.summary = None;
        self.error_message = Some(message.into());
        self.phase = Phase::Failed;
        true
    }

    /// Return to the initial idle state, keeping the configured length.
    ///
    /// Also advances the generation, so a completion from a submission
    /// dispatched before the reset can no longer be applied. Idempotent:
    /// two consecutive resets observe the same state as one.
    pub fn reset(&mut self) {
        self.input_text.clear();
        self.summary = None;
        self.error_message = None;
        self.phase = Phase::Idle;
        self.generation = self.generation.next();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
