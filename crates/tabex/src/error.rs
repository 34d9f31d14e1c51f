//! Error types for the tabex library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabex operations.
#[derive(Debug, Error)]
pub enum TabexError {
    /// The input file is missing or cannot be read.
    #[error("Cannot read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8.
    #[error("'{path}' is not valid UTF-8 text")]
    Encoding { path: PathBuf },

    /// A data row does not have as many fields as the header.
    ///
    /// `row` is 1-based and counts data rows only (the header is not row 1).
    #[error("Malformed data at row {row}: expected {expected} fields, found {found}")]
    MalformedData {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Empty file or no header to build a table from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A column name appears more than once.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// An operation needed a table but nothing has been loaded.
    #[error("No table loaded")]
    NoTableLoaded,

    /// Export target not recognised.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The export destination could not be created or written.
    #[error("Cannot write '{path}': {message}")]
    Write { path: PathBuf, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TabexError {
    pub(crate) fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        TabexError::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for tabex operations.
pub type Result<T> = std::result::Result<T, TabexError>;
