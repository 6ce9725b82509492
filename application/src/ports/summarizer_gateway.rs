//! Summarizer gateway port
//!
//! Defines the interface for communicating with the remote summarization
//! service.

use async_trait::async_trait;
use summarizer_domain::SummaryPrompt;
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// Every variant collapses to one fixed user-facing message at the
/// controller boundary; the detail carried here exists for operator
/// diagnostics only and is never rendered to the user.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request never produced an HTTP response (connect, DNS, I/O)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service answered with a non-success status
    #[error("Service returned HTTP {status}: {detail}")]
    HttpStatus { status: u16, detail: String },

    /// The response body could not be parsed as JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Parsed body of a successful summarization response.
///
/// `summary` is `None` when the service answered with a success status but
/// without the field; the caller substitutes a fixed placeholder.
#[derive(Debug, Clone, Default)]
pub struct SummaryResponse {
    pub summary: Option<String>,
}

/// Gateway for the remote summarization service
///
/// The application layer sends exactly one prompt per submission (no
/// chunking, no streaming) and receives either a parsed response body or
/// a [`GatewayError`]. Implementations (adapters) live in the
/// infrastructure layer and must not impose a request timeout: the pending
/// phase is bounded below by the display floor, never above.
#[async_trait]
pub trait SummarizerGateway: Send + Sync {
    /// Submit one prompt and await the settled response
    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<SummaryResponse, GatewayError>;
}
