//! Summarization instruction template

use crate::core::summary_length::SummaryLength;

/// The single instruction sent to the summarization service (Value Object)
///
/// One prompt is built per submission, capturing the input text and target
/// length at submit time. Later edits to the session do not affect a
/// prompt that has already been dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPrompt {
    instruction: String,
}

impl SummaryPrompt {
    /// Build the instruction for `text`, bounding the summary to
    /// `target_length` words
    pub fn build(text: &str, target_length: SummaryLength) -> Self {
        Self {
            instruction: format!(
                "Summarize this text. Limit the summary length to {} words: {}",
                target_length.words(),
                text
            ),
        }
    }

    /// The full instruction string
    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

impl std::fmt::Display for SummaryPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.instruction)
    }
}
