//! Averaging Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors during a column averaging pass
#[derive(Debug, Error)]
pub enum AveragerError {
    /// Input file missing, unreadable or permission-denied
    #[error("Cannot read input file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Value field that does not parse as a number
    #[error("Line {line}, column {column}: {value:?} is not a number")]
    InvalidNumber {
        line: u64,
        column: usize,
        value: String,
    },

    /// Data row width differs from the header width
    #[error("Line {line}: expected {expected} fields, found {found}")]
    ShapeMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Data row seen before any header row
    #[error("Line {line}: data row before any \"Year\" header row")]
    UninitializedAccumulator { line: u64 },

    /// Malformed CSV or read failure mid-stream
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AveragerError {
    /// Whether this error came from reaching the input rather than its content
    pub fn is_file_access(&self) -> bool {
        matches!(self, AveragerError::FileAccess { .. })
    }
}
