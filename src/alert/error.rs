//! Error types for loading alert input.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for reading an alert group.
#[derive(Debug, Error)]
pub enum AlertsError {
    /// Failed to read the alerts file.
    #[error("Failed to read alerts file '{}': {source}", path.display())]
    FileRead {
        /// Path to the alerts file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read alerts from standard input.
    #[error("Failed to read alerts from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// The input is not a valid alert group.
    #[error("Failed to parse alerts: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input parsed but contained no alerts.
    #[error("Alert group contains no alerts")]
    Empty,
}
