//! Error types for the seed generator.
//!
//! - [`CsvError`] - Reading, decoding and parsing the listing sheet
//! - [`OutputError`] - Writing the properties and owners files
//! - [`SeedError`] - Top-level errors returned by the pipeline
//!
//! Missing or malformed cell values are never errors: the transform
//! substitutes defaults for them. Only I/O and structural problems end up here.

use thiserror::Error;

// =============================================================================
// CSV Input Errors
// =============================================================================

/// Errors while loading the source CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed.
    #[error("Line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A required column is not in the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl CsvError {
    /// Convert a `csv` crate error, keeping the line it happened on.
    pub fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => CsvError::Io(e),
            _ => CsvError::Parse { line, message },
        }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing one of the generated files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create or write the file.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a record.
    #[error("Failed to serialize record for {path}: {message}")]
    Csv { path: String, message: String },
}

// =============================================================================
// Seed Errors (top-level)
// =============================================================================

/// Top-level errors returned by [`crate::transform::pipeline::generate`].
///
/// Any of these aborts the run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Input error.
    #[error("Input error: {0}")]
    Csv(#[from] CsvError),

    /// Output error.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for the pipeline.
pub type SeedResult<T> = Result<T, SeedError>;
