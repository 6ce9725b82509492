//! Session lifecycle controller.
//!
//! The sole mediator between user-triggered events and the summarizer
//! gateway / clipboard adapters. Owns the mutable [`Session`] and exposes
//! the three user operations (`submit`, `copy_result`, `reset`) plus
//! `resolve`, which the event loop calls when a dispatched request
//! settles.
//!
//! Architecture:
//! ```text
//! event loop (single writer)            request task (tokio::spawn)
//!   ├─ submit() ────── spawns ───────>  join!(use case, floor sleep)
//!   ├─ resolve(settled) <── settled_tx ───────────┘
//!   ├─ copy_result()
//!   └─ reset()
//! ```
//!
//! The request task never mutates the session. It reports back through
//! the channel as a [`SubmissionSettled`] carrying the generation it was
//! issued against; `resolve` applies it only if that generation is still
//! current, so a completion from before a reset (or a superseded
//! submission) cannot resurrect stale state.

use crate::config::LifecycleParams;
use crate::ports::clipboard::ClipboardPort;
use crate::ports::diagnostics::{DiagnosticsEvent, DiagnosticsLogger, NoDiagnostics};
use crate::ports::summarizer_gateway::{GatewayError, SummarizerGateway};
use crate::use_cases::request_summary::{RequestSummaryInput, RequestSummaryUseCase};
use std::sync::Arc;
use std::time::Instant;
use summarizer_domain::{Generation, Session, SummaryLength, truncate_str};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The only failure text ever shown to the user. The raw cause goes to
/// tracing and the diagnostics log instead.
pub const SERVICE_FAILURE_MESSAGE: &str = "Unable to access AI. Please refresh and try again.";

/// A settled submission, reported from the request task to the event loop.
///
/// Carries the generation the request was dispatched under; `resolve`
/// discards it if the session has since moved on.
#[derive(Debug)]
pub struct SubmissionSettled {
    pub generation: Generation,
    pub outcome: Result<String, GatewayError>,
    /// Wall-clock time from dispatch to settle (request and floor).
    pub elapsed_ms: u64,
}

/// Feedback from a [`SessionController::copy_result`] call, surfaced as a
/// transient notice. Distinct from the session's error message: clipboard
/// trouble never changes the lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Copied,
    Failed,
}

/// Controller owning one [`Session`] and its request lifecycle.
pub struct SessionController {
    session: Session,
    use_case: RequestSummaryUseCase,
    clipboard: Arc<dyn ClipboardPort>,
    diagnostics: Arc<dyn DiagnosticsLogger>,
    params: LifecycleParams,
    settled_tx: mpsc::UnboundedSender<SubmissionSettled>,
}

impl SessionController {
    pub fn new(
        gateway: Arc<dyn SummarizerGateway>,
        clipboard: Arc<dyn ClipboardPort>,
        params: LifecycleParams,
        settled_tx: mpsc::UnboundedSender<SubmissionSettled>,
    ) -> Self {
        Self {
            session: Session::new(),
            use_case: RequestSummaryUseCase::new(gateway),
            clipboard,
            diagnostics: Arc::new(NoDiagnostics),
            params,
            settled_tx,
        }
    }

    /// Set a diagnostics logger for settled-request records.
    pub fn with_diagnostics(mut self, logger: Arc<dyn DiagnosticsLogger>) -> Self {
        self.diagnostics = logger;
        self
    }

    /// Preconfigure the session's summary length.
    pub fn with_target_length(mut self, length: SummaryLength) -> Self {
        self.session.set_target_length(length);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Record edited input text. Never triggers a request.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.session.set_input_text(text);
    }

    pub fn set_target_length(&mut self, length: SummaryLength) {
        self.session.set_target_length(length);
    }

    /// Start a submission.
    ///
    /// Silently declines on blank input or while a request is outstanding,
    /// so at most one request is ever in flight per session. The dispatched
    /// task runs the gateway call and the floor timer concurrently and
    /// reports back through the settled channel once both are done; the
    /// event loop stays free the whole time.
    pub fn submit(&mut self) {
        let Some(generation) = self.session.begin_submission() else {
            debug!("Submission declined (blank input or request outstanding)");
            return;
        };

        let input = RequestSummaryInput::new(
            self.session.input_text(),
            self.session.target_length(),
        );
        let use_case = self.use_case.clone();
        let floor = self.params.pending_floor();
        let tx = self.settled_tx.clone();

        info!(generation = generation.value(), "Submission dispatched");

        tokio::spawn(async move {
            let started = Instant::now();
            // The phase may not leave Pending until both the request has
            // settled and the floor has elapsed
            let (outcome, ()) =
                tokio::join!(use_case.execute(&input), tokio::time::sleep(floor));
            let _ = tx.send(SubmissionSettled {
                generation,
                outcome,
                elapsed_ms: started.elapsed().as_millis() as u64,
            });
        });
    }

    /// Apply a settled submission to the session.
    ///
    /// Stale completions (the session's generation has moved on) are
    /// recorded in diagnostics and otherwise ignored.
    pub fn resolve(&mut self, settled: SubmissionSettled) {
        let generation = settled.generation;
        match settled.outcome {
            Ok(summary) => {
                let bytes = summary.len();
                let applied = self.session.complete_success(generation, summary);
                if !applied {
                    debug!(
                        generation = generation.value(),
                        "Discarded stale success completion"
                    );
                }
                self.diagnostics.log(DiagnosticsEvent::new(
                    "request_settled",
                    serde_json::json!({
                        "generation": generation.value(),
                        "outcome": "success",
                        "bytes": bytes,
                        "elapsed_ms": settled.elapsed_ms,
                        "stale": !applied,
                    }),
                ));
            }
            Err(error) => {
                // The raw cause stays operator-side; the user sees only
                // the fixed message
                warn!(
                    generation = generation.value(),
                    "Summarization request failed: {error}"
                );
                let applied = self
                    .session
                    .complete_failure(generation, SERVICE_FAILURE_MESSAGE);
                if !applied {
                    debug!(
                        generation = generation.value(),
                        "Discarded stale failure completion"
                    );
                }
                self.diagnostics.log(DiagnosticsEvent::new(
                    "request_failed",
                    serde_json::json!({
                        "generation": generation.value(),
                        "cause": error.to_string(),
                        "elapsed_ms": settled.elapsed_ms,
                        "stale": !applied,
                    }),
                ));
            }
        }
    }

    /// Copy the current summary to the clipboard.
    ///
    /// Returns `None` (and writes nothing) unless the session is `Ready`.
    /// Session state is never mutated here.
    pub fn copy_result(&self) -> Option<CopyFeedback> {
        if !self.session.phase().is_ready() {
            return None;
        }
        let summary = self.session.summary()?;
        match self.clipboard.write_text(summary) {
            Ok(()) => {
                debug!("Copied summary to clipboard ({} bytes)", summary.len());
                Some(CopyFeedback::Copied)
            }
            Err(error) => {
                warn!(
                    "Clipboard write failed for summary '{}…': {error}",
                    truncate_str(summary, 32)
                );
                Some(CopyFeedback::Failed)
            }
        }
    }

    /// Return the session to its initial state (summary length excepted).
    ///
    /// Callable from any phase; dismissing the error panel routes here. An
    /// in-flight request is not cancelled, but its completion will no
    /// longer match the session's generation and is discarded on arrival.
    pub fn reset(&mut self) {
        self.session.reset();
        debug!("Session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clipboard::ClipboardError;
    use crate::ports::summarizer_gateway::SummaryResponse;
    use crate::use_cases::request_summary::MISSING_SUMMARY_PLACEHOLDER;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use summarizer_domain::{Phase, SummaryPrompt};

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<SummaryResponse, GatewayError>>>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<SummaryResponse, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                prompts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn succeeding(summary: &str) -> Self {
            Self::new(vec![Ok(SummaryResponse {
                summary: Some(summary.to_string()),
            })])
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SummarizerGateway for MockGateway {
        async fn summarize(
            &self,
            prompt: &SummaryPrompt,
        ) -> Result<SummaryResponse, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts
                .lock()
                .unwrap()
                .push(prompt.instruction().to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(SummaryResponse::default()))
        }
    }

    struct MockClipboard {
        writes: Mutex<Vec<String>>,
        fail: bool,
    }

    impl MockClipboard {
        fn new() -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl ClipboardPort for MockClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Harness {
        controller: SessionController,
        settled_rx: mpsc::UnboundedReceiver<SubmissionSettled>,
        gateway: Arc<MockGateway>,
        clipboard: Arc<MockClipboard>,
    }

    fn harness(gateway: MockGateway, clipboard: MockClipboard) -> Harness {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let gateway = Arc::new(gateway);
        let clipboard = Arc::new(clipboard);
        let controller = SessionController::new(
            gateway.clone(),
            clipboard.clone(),
            LifecycleParams::default(),
            settled_tx,
        );
        Harness {
            controller,
            settled_rx,
            gateway,
            clipboard,
        }
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_successful_submission_reaches_ready_after_floor() {
        let mut h = harness(MockGateway::succeeding("X"), MockClipboard::new());
        h.controller.set_input_text("some text to summarize");

        let started = tokio::time::Instant::now();
        h.controller.submit();
        assert_eq!(h.controller.session().phase(), Phase::Pending);

        let settled = h.settled_rx.recv().await.unwrap();
        // Even with an instant mock response, the settle waits out the floor
        assert!(started.elapsed() >= Duration::from_millis(5_000));

        h.controller.resolve(settled);
        let session = h.controller.session();
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.summary(), Some("X"));
        assert!(session.error_message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_http_failure_reaches_failed_with_fixed_message() {
        let mut h = harness(
            MockGateway::new(vec![Err(GatewayError::HttpStatus {
                status: 500,
                detail: "boom".to_string(),
            })]),
            MockClipboard::new(),
        );
        h.controller.set_input_text("some text");

        let started = tokio::time::Instant::now();
        h.controller.submit();
        let settled = h.settled_rx.recv().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(5_000));

        h.controller.resolve(settled);
        let session = h.controller.session();
        assert_eq!(session.phase(), Phase::Failed);
        assert!(session.summary().is_none());
        let message = session.error_message().unwrap();
        assert_eq!(message, SERVICE_FAILURE_MESSAGE);
        // The raw diagnostic never leaks into the user-facing message
        assert!(!message.contains("boom"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_uses_same_fixed_message() {
        let mut h = harness(
            MockGateway::new(vec![Err(GatewayError::ConnectionError(
                "dns error: no such host".to_string(),
            ))]),
            MockClipboard::new(),
        );
        h.controller.set_input_text("some text");

        h.controller.submit();
        let settled = h.settled_rx.recv().await.unwrap();
        h.controller.resolve(settled);

        assert_eq!(
            h.controller.session().error_message(),
            Some(SERVICE_FAILURE_MESSAGE)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_summary_field_yields_placeholder() {
        let mut h = harness(
            MockGateway::new(vec![Ok(SummaryResponse {
                summary: None,
            })]),
            MockClipboard::new(),
        );
        h.controller.set_input_text("some text");

        h.controller.submit();
        let settled = h.settled_rx.recv().await.unwrap();
        h.controller.resolve(settled);

        assert_eq!(
            h.controller.session().summary(),
            Some(MISSING_SUMMARY_PLACEHOLDER)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_submission_is_silently_declined() {
        let mut h = harness(MockGateway::succeeding("X"), MockClipboard::new());
        h.controller.set_input_text("   \n ");

        h.controller.submit();
        assert_eq!(h.controller.session().phase(), Phase::Idle);
        assert!(h.settled_rx.try_recv().is_err());
        assert_eq!(h.gateway.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reentrant_submit_launches_no_second_request() {
        let mut h = harness(MockGateway::succeeding("X"), MockClipboard::new());
        h.controller.set_input_text("some text");

        h.controller.submit();
        h.controller.submit();

        let settled = h.settled_rx.recv().await.unwrap();
        h.controller.resolve(settled);
        assert_eq!(h.gateway.calls(), 1);
        assert!(h.settled_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_payload_is_captured_at_submit_time() {
        let mut h = harness(MockGateway::succeeding("X"), MockClipboard::new());
        h.controller.set_input_text("original text");
        h.controller.set_target_length(SummaryLength::new(7));

        h.controller.submit();
        // Edits while pending do not touch the in-flight payload
        h.controller.set_input_text("edited while pending");
        h.controller.set_target_length(SummaryLength::new(90));

        let settled = h.settled_rx.recv().await.unwrap();
        h.controller.resolve(settled);

        let prompts = h.gateway.prompts.lock().unwrap();
        assert_eq!(
            prompts[0],
            "Summarize this text. Limit the summary length to 7 words: original text"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_after_reset_is_discarded() {
        let mut h = harness(MockGateway::succeeding("late"), MockClipboard::new());
        h.controller.set_input_text("some text");

        h.controller.submit();
        h.controller.reset();

        let settled = h.settled_rx.recv().await.unwrap();
        h.controller.resolve(settled);

        let session = h.controller.session();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.summary().is_none());
        assert!(session.error_message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_preserves_target_length() {
        let mut h = harness(MockGateway::succeeding("X"), MockClipboard::new());
        h.controller.set_target_length(SummaryLength::new(33));
        h.controller.set_input_text("some text");

        h.controller.reset();

        assert_eq!(h.controller.session().target_length().words(), 33);
        assert_eq!(h.controller.session().input_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_before_ready_writes_nothing() {
        let h = harness(MockGateway::succeeding("X"), MockClipboard::new());
        assert!(h.controller.copy_result().is_none());
        assert!(h.clipboard.writes.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_writes_summary_verbatim() {
        let mut h = harness(
            MockGateway::succeeding("Exactly this summary."),
            MockClipboard::new(),
        );
        h.controller.set_input_text("some text");
        h.controller.submit();
        let settled = h.settled_rx.recv().await.unwrap();
        h.controller.resolve(settled);

        assert_eq!(h.controller.copy_result(), Some(CopyFeedback::Copied));
        assert_eq!(
            h.clipboard.writes.lock().unwrap().as_slice(),
            ["Exactly this summary."]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clipboard_failure_leaves_phase_untouched() {
        let mut h = harness(MockGateway::succeeding("X"), MockClipboard::failing());
        h.controller.set_input_text("some text");
        h.controller.submit();
        let settled = h.settled_rx.recv().await.unwrap();
        h.controller.resolve(settled);

        assert_eq!(h.controller.copy_result(), Some(CopyFeedback::Failed));
        assert_eq!(h.controller.session().phase(), Phase::Ready);
        assert!(h.controller.session().error_message().is_none());
    }
}
