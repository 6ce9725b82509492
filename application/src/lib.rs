//! Application layer for text-summarizer
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LifecycleParams;
pub use ports::{
    clipboard::{ClipboardError, ClipboardPort},
    diagnostics::{DiagnosticsEvent, DiagnosticsLogger, NoDiagnostics},
    summarizer_gateway::{GatewayError, SummarizerGateway, SummaryResponse},
};
pub use use_cases::request_summary::{
    MISSING_SUMMARY_PLACEHOLDER, RequestSummaryInput, RequestSummaryUseCase,
};
pub use use_cases::session_controller::{
    CopyFeedback, SERVICE_FAILURE_MESSAGE, SessionController, SubmissionSettled,
};
