//! Wire types for the summarization service.
//!
//! The service accepts a single JSON document whose `messages` array holds
//! role-tagged messages; each message's `content` is an array of typed
//! blocks. Exactly one user message with one text block is sent per
//! request.

use serde::{Deserialize, Serialize};
use summarizer_domain::SummaryPrompt;

/// `POST` body sent to the summarization endpoint.
#[derive(Debug, Serialize)]
pub struct SummarizeRequestBody {
    pub messages: Vec<OutboundMessage>,
}

impl SummarizeRequestBody {
    /// Wrap one prompt as the single user message of a request
    pub fn from_prompt(prompt: &SummaryPrompt) -> Self {
        Self {
            messages: vec![OutboundMessage::user_text(prompt.instruction())],
        }
    }
}

/// One role-tagged message on the wire.
#[derive(Debug, Serialize)]
pub struct OutboundMessage {
    pub role: &'static str,
    pub content: Vec<ContentBlock>,
}

impl OutboundMessage {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: vec![ContentBlock::text(text)],
        }
    }
}

/// Typed content block inside a message.
#[derive(Debug, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
        }
    }
}

/// Body of a success response. The `summary` field may be absent.
#[derive(Debug, Deserialize)]
pub struct SummarizeResponseBody {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body of a non-success response. `error` is kept for operator
/// diagnostics only and never rendered to the user.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use summarizer_domain::SummaryLength;

    #[test]
    fn test_request_body_wire_shape() {
        let prompt = SummaryPrompt::build("Some text.", SummaryLength::new(10));
        let body = SummarizeRequestBody::from_prompt(&prompt);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "messages": [
                    {
                        "role": "user",
                        "content": [
                            {
                                "type": "text",
                                "text": "Summarize this text. Limit the summary length to 10 words: Some text."
                            }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_exactly_one_message_per_request() {
        let prompt = SummaryPrompt::build("abc", SummaryLength::new(3));
        let body = SummarizeRequestBody::from_prompt(&prompt);
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].content.len(), 1);
    }

    #[test]
    fn test_response_body_with_summary() {
        let body: SummarizeResponseBody =
            serde_json::from_str(r#"{"summary": "A summary."}"#).unwrap();
        assert_eq!(body.summary.as_deref(), Some("A summary."));
    }

    #[test]
    fn test_response_body_without_summary() {
        let body: SummarizeResponseBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.summary.is_none());
    }

    #[test]
    fn test_error_body() {
        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"error": "model overloaded"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("model overloaded"));

        let empty: ServiceErrorBody = serde_json::from_str(r#"{"detail": 1}"#).unwrap();
        assert!(empty.error.is_none());
    }
}
