//! Dataset error types
//!
//! Everything that can go wrong while loading the launch CSV. All of these
//! are fatal at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself is malformed (bad quoting, wrong field count, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A data row has an invalid value
    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    /// The file has a header but no data rows
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type alias for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;
