//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot summaries
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// The summary as plain text
    Text,
    /// A JSON object with a `summary` field
    Json,
}

/// CLI arguments for text-summarizer
#[derive(Parser, Debug)]
#[command(name = "text-summarizer")]
#[command(version, about = "Summarize free-form text with a remote AI service")]
#[command(long_about = r#"
Summarize free-form text with a remote AI service.

One-shot mode prints a single summary and exits; the interactive TUI keeps
a single-page session open where you can edit text, pick a summary length,
and copy the result to the clipboard.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./summarizer.toml      Project-level config
3. ~/.config/text-summarizer/config.toml   Global config

Example:
  text-summarizer "Long article text..."
  text-summarizer --file notes.txt --length 25
  cat report.txt | text-summarizer --stdin -o json
  text-summarizer --tui
"#)]
pub struct Cli {
    /// Text to summarize (or use --file / --stdin / --tui)
    pub text: Option<String>,

    /// Read the text to summarize from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Read the text to summarize from standard input
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub stdin: bool,

    /// Summary length in words (1-100)
    #[arg(short, long, value_name = "WORDS")]
    pub length: Option<u32>,

    /// Start the interactive single-page TUI
    #[arg(short, long)]
    pub tui: bool,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
