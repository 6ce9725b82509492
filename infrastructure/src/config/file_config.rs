//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use summarizer_application::LifecycleParams;
use summarizer_domain::SummaryLength;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Summarization service settings
    pub service: FileServiceConfig,
    /// Lifecycle behavior settings
    pub behavior: FileBehaviorConfig,
    /// Diagnostics logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Lifecycle parameters for the interactive controller
    pub fn lifecycle_params(&self) -> LifecycleParams {
        LifecycleParams::default().with_pending_floor_ms(self.behavior.pending_floor_ms)
    }

    /// Validate the configuration, returning warnings for suspicious
    /// values. Nothing here is fatal; callers log the warnings and
    /// continue.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.service.endpoint.trim().is_empty() {
            issues.push("service.endpoint is empty; requests cannot be sent".to_string());
        } else if !self.service.endpoint.starts_with("http://")
            && !self.service.endpoint.starts_with("https://")
        {
            issues.push(format!(
                "service.endpoint '{}' does not look like an HTTP URL",
                self.service.endpoint
            ));
        }

        if self.behavior.pending_floor_ms > 30_000 {
            issues.push(format!(
                "behavior.pending_floor_ms = {} keeps the loading state visible for over 30s",
                self.behavior.pending_floor_ms
            ));
        }

        issues
    }
}

/// Summarization service settings (`[service]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Endpoint URL the request payload is POSTed to
    pub endpoint: String,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ai-text-summarizer.ai-text-summarizer.workers.dev".to_string(),
            user_agent: "text-summarizer/0.4".to_string(),
        }
    }
}

/// Lifecycle behavior settings (`[behavior]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Minimum visible duration of the pending phase, in milliseconds
    pub pending_floor_ms: u64,
    /// Default summary length in words; out-of-range values clamp to
    /// [1, 100]
    pub default_length: SummaryLength,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            pending_floor_ms: 5_000,
            default_length: SummaryLength::default(),
        }
    }
}

/// Diagnostics logging settings (`[logging]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL diagnostics log; unset disables it
    pub diagnostics_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.service.endpoint.starts_with("https://"));
        assert_eq!(config.behavior.pending_floor_ms, 5_000);
        assert_eq!(config.behavior.default_length.words(), 10);
        assert!(config.logging.diagnostics_path.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_toml_overrides_and_clamping() {
        let config: FileConfig = toml::from_str(
            r#"
            [service]
            endpoint = "https://summarizer.example/api"

            [behavior]
            pending_floor_ms = 250
            default_length = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.service.endpoint, "https://summarizer.example/api");
        assert_eq!(config.behavior.pending_floor_ms, 250);
        // Out-of-range lengths clamp instead of failing the load
        assert_eq!(config.behavior.default_length.words(), 100);
        // Untouched sections keep defaults
        assert_eq!(config.service.user_agent, "text-summarizer/0.4");
    }

    #[test]
    fn test_validate_flags_empty_endpoint() {
        let mut config = FileConfig::default();
        config.service.endpoint = String::new();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("service.endpoint"));
    }

    #[test]
    fn test_validate_flags_excessive_floor() {
        let mut config = FileConfig::default();
        config.behavior.pending_floor_ms = 60_000;
        assert!(!config.validate().is_empty());
    }
}
