//! CLI entrypoint for text-summarizer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Read;
use std::sync::Arc;
use summarizer_application::{
    DiagnosticsEvent, DiagnosticsLogger, NoDiagnostics, RequestSummaryInput,
    RequestSummaryUseCase, SERVICE_FAILURE_MESSAGE,
};
use summarizer_domain::SummaryLength;
use summarizer_infrastructure::{
    ConfigLoader, FileConfig, HttpSummarizerGateway, JsonlDiagnosticsLogger, SystemClipboard,
};
use summarizer_presentation::{Cli, ConsoleFormatter, OneShotSpinner, OutputFormat, TuiApp};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };
    for issue in config.validate() {
        warn!("Config: {issue}");
    }

    info!("Starting text-summarizer");

    // === Dependency Injection ===
    let gateway = Arc::new(HttpSummarizerGateway::new(
        &config.service.endpoint,
        &config.service.user_agent,
    ));
    let diagnostics = build_diagnostics(&config);
    let target_length =
        SummaryLength::new(cli.length.unwrap_or(config.behavior.default_length.words()));

    // Interactive single-page TUI
    if cli.tui {
        let clipboard = Arc::new(SystemClipboard::new());
        let mut app = TuiApp::new(
            gateway,
            clipboard,
            diagnostics,
            config.lifecycle_params(),
            target_length,
        );
        app.run().await?;
        return Ok(());
    }

    // One-shot mode
    let text = gather_input_text(&cli)?;
    if text.trim().is_empty() {
        bail!("Input text is empty.");
    }

    let use_case = RequestSummaryUseCase::new(gateway);
    let input = RequestSummaryInput::new(text, target_length);

    let spinner = (!cli.quiet).then(OneShotSpinner::start);
    let started = std::time::Instant::now();
    let result = use_case.execute(&input).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    match result {
        Ok(summary) => {
            diagnostics.log(DiagnosticsEvent::new(
                "request_settled",
                serde_json::json!({
                    "outcome": "success",
                    "bytes": summary.len(),
                    "elapsed_ms": elapsed_ms,
                }),
            ));
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_text(&summary),
                OutputFormat::Json => ConsoleFormatter::format_json(&summary),
            };
            println!("{}", output);
            Ok(())
        }
        Err(error) => {
            // The raw cause goes to the operator-side logs only
            warn!("Summarization request failed: {error}");
            diagnostics.log(DiagnosticsEvent::new(
                "request_failed",
                serde_json::json!({
                    "cause": error.to_string(),
                    "elapsed_ms": elapsed_ms,
                }),
            ));
            bail!("{SERVICE_FAILURE_MESSAGE}");
        }
    }
}

fn build_diagnostics(config: &FileConfig) -> Arc<dyn DiagnosticsLogger> {
    match &config.logging.diagnostics_path {
        Some(path) => match JsonlDiagnosticsLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoDiagnostics),
        },
        None => Arc::new(NoDiagnostics),
    }
}

fn gather_input_text(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if cli.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    bail!("Nothing to summarize. Pass TEXT, --file, --stdin, or --tui.");
}
