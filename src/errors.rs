//! Shared error types for ranking operations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rankmap operations.
///
/// Malformed data lines are deliberately not represented here: a line with
/// the wrong field count is dropped and a non-numeric score flows through
/// as a sentinel value. Only whole-file and configuration failures are
/// surfaced.
#[derive(Debug, Error)]
pub enum RankError {
    /// Input file missing or unreadable. Fatal, never retried.
    #[error("cannot read score table {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file errors
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, RankError>;
