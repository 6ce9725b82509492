//! Console output formatter for one-shot summaries

use colored::Colorize;

/// Formats one-shot results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Plain text output: a header line and the summary itself
    pub fn format_text(summary: &str) -> String {
        format!("{}\n{}", "Summary:".cyan().bold(), summary)
    }

    /// JSON output: `{"summary": "..."}`
    pub fn format_json(summary: &str) -> String {
        serde_json::json!({ "summary": summary }).to_string()
    }
}
