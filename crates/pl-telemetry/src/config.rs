//! Telemetry configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// File name used when `PL_LOG_FILE` is not set.
pub const DEFAULT_LOG_FILE: &str = "pattern-labs.log";

/// Configuration for file-backed logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to lifecycle events
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or a directive list)
    pub log_level: String,

    /// Destination file; the terminal itself belongs to the UI
    pub log_file: PathBuf,

    /// Whether to write JSON lines instead of plain text
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "pattern-labs".to_string(),
            log_level: "info".to_string(),
            log_file: env::temp_dir().join(DEFAULT_LOG_FILE),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PL_SERVICE_NAME`: Service name (default: pattern-labs)
    /// - `PL_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `PL_LOG_FILE`: Log file path (default: `<tmp>/pattern-labs.log`)
    /// - `PL_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service_name: lookup("PL_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("PL_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            log_file: lookup("PL_LOG_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),

            json_logs: lookup("PL_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Override the log level, e.g. from a command line flag.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Override the log destination.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "pattern-labs");
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.ends_with(DEFAULT_LOG_FILE));
        assert!(!config.json_logs);
    }

    #[test]
    fn test_env_overrides() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("PL_SERVICE_NAME", "labs-dev"),
            ("PL_LOG_LEVEL", "debug"),
            ("PL_LOG_FILE", "/var/log/labs.log"),
            ("PL_JSON_LOGS", "1"),
        ]));
        assert_eq!(config.service_name, "labs-dev");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, PathBuf::from("/var/log/labs.log"));
        assert!(config.json_logs);
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[("RUST_LOG", "warn")]));
        assert_eq!(config.log_level, "warn");

        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "warn"),
            ("PL_LOG_LEVEL", "trace"),
        ]));
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_blank_log_file_uses_default() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[("PL_LOG_FILE", "  ")]));
        assert!(config.log_file.ends_with(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_builder_overrides() {
        let config = TelemetryConfig::default()
            .with_log_level("pl_demos=trace")
            .with_log_file("/tmp/other.log");
        assert_eq!(config.log_level, "pl_demos=trace");
        assert_eq!(config.log_file, PathBuf::from("/tmp/other.log"));
    }
}
