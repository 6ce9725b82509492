//! Configuration loading and validation

mod file_config;
mod loader;

pub use file_config::{FileBehaviorConfig, FileConfig, FileLoggingConfig, FileServiceConfig};
pub use loader::ConfigLoader;
