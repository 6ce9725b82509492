//! Port for structured operator diagnostics.
//!
//! Defines the [`DiagnosticsLogger`] trait for recording settled-request
//! records (outcome, elapsed time, raw failure cause) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! machine-readable record of each request, including the raw transport
//! error that is deliberately withheld from the user-facing surface.

use serde_json::Value;

/// A structured diagnostics event for logging.
pub struct DiagnosticsEvent {
    /// Event type identifier (e.g., "request_settled", "request_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DiagnosticsEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging diagnostics events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible:
/// a broken diagnostics sink must never disturb the request lifecycle.
pub trait DiagnosticsLogger: Send + Sync {
    /// Record a diagnostics event.
    fn log(&self, event: DiagnosticsEvent);
}

/// No-op implementation for tests and when diagnostics are disabled.
pub struct NoDiagnostics;

impl DiagnosticsLogger for NoDiagnostics {
    fn log(&self, _event: DiagnosticsEvent) {}
}
