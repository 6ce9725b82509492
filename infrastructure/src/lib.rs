//! Infrastructure layer for text-summarizer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clipboard;
pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use clipboard::SystemClipboard;
pub use config::{
    ConfigLoader, FileBehaviorConfig, FileConfig, FileLoggingConfig, FileServiceConfig,
};
pub use http::HttpSummarizerGateway;
pub use logging::JsonlDiagnosticsLogger;
