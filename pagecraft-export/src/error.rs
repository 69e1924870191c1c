//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while configuring an export.
///
/// Serialization itself never fails; these only come from parsing user input.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Target format string was not recognised.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Settings could not be parsed.
    #[error("Invalid export settings: {0}")]
    Settings(#[from] serde_json::Error),
}
