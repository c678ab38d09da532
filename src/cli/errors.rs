//! CLI-specific error types
//!
//! All CLI errors are fatal: printed to stderr by main, non-zero exit.

use thiserror::Error;

use crate::errors::ReportError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Schema, storage or seeding failure
    #[error("{0}")]
    Report(#[from] ReportError),

    /// Runtime or server I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
