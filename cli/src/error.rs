use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the I/O layer around the converter.
///
/// The conversion itself never fails; everything here comes from
/// reading the input or writing the output.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input path missing or not a regular file.
    #[error("'{}' does not exist or is not a file", .path.display())]
    InvalidInput { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O error without a path, e.g. on standard input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
