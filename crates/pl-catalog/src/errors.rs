//! # Error Types
//!
//! Failures are limited to parsing ids that come from outside the catalog
//! (command line, environment).

use thiserror::Error;

/// Errors raised when resolving external input against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The string is not one of the known pattern keys.
    #[error("Unknown pattern id: '{0}' (run with --list to see valid ids)")]
    UnknownPattern(String),
}
