//! Prompt construction for the summarization request

pub mod template;

pub use template::SummaryPrompt;
