//! # PatternLabs Telemetry
//!
//! Structured logging for the PatternLabs terminal application.
//!
//! The terminal is owned by the UI, so every event is written to a log file
//! instead of stdout/stderr. Tail it in a second terminal while exploring.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pl_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PL_SERVICE_NAME` | `pattern-labs` | Service name attached to the startup event |
//! | `PL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `PL_LOG_FILE` | `<tmp>/pattern-labs.log` | Log destination |
//! | `PL_JSON_LOGS` | `false` | Emit JSON lines instead of plain text |

mod config;
mod logging;
mod subscriber;

pub use config::TelemetryConfig;
pub use subscriber::{build_filter, init_telemetry};

use std::path::PathBuf;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Guard that keeps logging active. Dropping it records the shutdown.
pub struct TelemetryGuard {
    service_name: String,
    log_file: PathBuf,
}

impl TelemetryGuard {
    /// Path the subscriber writes to.
    pub fn log_file(&self) -> &std::path::Path {
        &self.log_file
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
