//! Error types for portprobe.
//!
//! Uses `thiserror` for ergonomic error definitions.
//!
//! Only configuration problems are modeled as errors: they are detected
//! before the first probe and abort the run. Network failures during a scan
//! are outcomes, not errors (see [`crate::scanner::PortOutcome`]).

use thiserror::Error;

/// Fatal configuration errors, raised before any scanning begins.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid port range '{0}': expected <start>-<end>, e.g. 0-65535")]
    MalformedRange(String),

    #[error("port {0} is out of valid range (0-65535)")]
    PortOutOfRange(u32),

    #[error("invalid port range: start ({0}) > end ({1})")]
    InvertedRange(u16, u16),

    #[error("invalid socket timeout {0}: expected a positive number of milliseconds")]
    NonPositiveTimeout(i64),

    #[error("invalid concurrency 0: at least one probe must be in flight")]
    ZeroConcurrency,
}

/// Result type alias for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;
