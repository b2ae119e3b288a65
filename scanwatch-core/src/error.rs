//! Error types for the polling engine

use thiserror::Error;

/// Invalid polling configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_attempts must be greater than 0")]
    ZeroMaxAttempts,

    #[error("poll_interval must be greater than 0")]
    ZeroPollInterval,

    #[error("initialization_timeout must be greater than 0")]
    ZeroInitializationTimeout,
}

/// Errors that end a session before or outside of polling
///
/// Status probe failures never show up here; they are folded into
/// indeterminate observations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The pre-start gate reported (or could not rule out) an active scan
    #[error("a scan is already running; refusing to start another")]
    ScanAlreadyActive,

    /// The service rejected or failed the start request
    #[error("failed to start scan: {0:#}")]
    StartFailed(#[source] anyhow::Error),

    /// The service rejected or failed the cancel request
    #[error("failed to cancel scan {scan_id}: {source:#}")]
    CancelFailed {
        scan_id: String,
        #[source]
        source: anyhow::Error,
    },
}
