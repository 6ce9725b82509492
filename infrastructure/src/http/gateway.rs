//! HTTP gateway adapter for the summarization service

use super::protocol::{ServiceErrorBody, SummarizeRequestBody, SummarizeResponseBody};
use async_trait::async_trait;
use summarizer_application::ports::summarizer_gateway::{
    GatewayError, SummarizerGateway, SummaryResponse,
};
use summarizer_domain::{SummaryPrompt, truncate_str};
use tracing::debug;

/// Upper bound on the error detail captured from a non-JSON body.
const MAX_ERROR_DETAIL: usize = 2 * 1024;

/// Gateway adapter that `POST`s the request payload to the configured
/// endpoint.
///
/// No request timeout is configured: the pending phase is bounded below
/// by the display floor, not above, and slow responses are allowed to
/// finish.
pub struct HttpSummarizerGateway {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl HttpSummarizerGateway {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummarizerGateway for HttpSummarizerGateway {
    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<SummaryResponse, GatewayError> {
        let body = SummarizeRequestBody::from_prompt(prompt);

        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .header("User-Agent", &self.user_agent)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ServiceErrorBody>(&bytes)
                .ok()
                .and_then(|parsed| parsed.error)
                .unwrap_or_else(|| {
                    let text = String::from_utf8_lossy(&bytes);
                    truncate_str(&text, MAX_ERROR_DETAIL).to_string()
                });
            debug!(
                status = status.as_u16(),
                "Summarization service answered with an error body"
            );
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: SummarizeResponseBody = serde_json::from_slice(&bytes)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        Ok(SummaryResponse {
            summary: parsed.summary,
        })
    }
}
