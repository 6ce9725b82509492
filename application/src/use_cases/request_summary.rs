//! Request summary use case.
//!
//! Executes a single summarization request: builds the instruction from
//! the text and target length captured at submit time, invokes the
//! gateway, and maps the parsed body to the summary text.
//!
//! Outcome mapping is deliberately asymmetric: a success body without the
//! summary field still succeeds (with a fixed placeholder), while any
//! gateway error is returned raw for the caller to normalize and log.

use crate::ports::summarizer_gateway::{GatewayError, SummarizerGateway};
use std::sync::Arc;
use summarizer_domain::{SummaryLength, SummaryPrompt};
use tracing::{debug, info, warn};

/// Substituted when the service answers successfully without a summary
/// field.
pub const MISSING_SUMMARY_PLACEHOLDER: &str = "No summary available.";

/// Input for the [`RequestSummaryUseCase`].
///
/// Captures the text and target length at submit time; later edits to the
/// session do not affect an input that has already been dispatched.
#[derive(Debug, Clone)]
pub struct RequestSummaryInput {
    /// The text to summarize.
    pub text: String,
    /// Desired summary length in words.
    pub target_length: SummaryLength,
}

impl RequestSummaryInput {
    pub fn new(text: impl Into<String>, target_length: SummaryLength) -> Self {
        Self {
            text: text.into(),
            target_length,
        }
    }
}

/// Use case for running one summarization request.
pub struct RequestSummaryUseCase {
    gateway: Arc<dyn SummarizerGateway>,
}

impl Clone for RequestSummaryUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl RequestSummaryUseCase {
    pub fn new(gateway: Arc<dyn SummarizerGateway>) -> Self {
        Self {
            gateway,
        }
    }

    /// Execute the request and return the summary text.
    pub async fn execute(&self, input: &RequestSummaryInput) -> Result<String, GatewayError> {
        let prompt = SummaryPrompt::build(&input.text, input.target_length);
        debug!(
            "Dispatching summarization request ({} input bytes, {} words requested)",
            input.text.len(),
            input.target_length
        );

        let response = self.gateway.summarize(&prompt).await?;

        let summary = response.summary.unwrap_or_else(|| {
            warn!("Success response without a summary field; substituting placeholder");
            MISSING_SUMMARY_PLACEHOLDER.to_string()
        });

        info!("Summarization request completed ({} bytes)", summary.len());
        Ok(summary)
    }
}
