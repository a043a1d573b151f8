//! Ingestion error types.

use std::path::PathBuf;
use thiserror::Error;

/// Dataset import error.
///
/// Every variant is surfaced to the user and aborts the import; the
/// previously loaded document set stays untouched.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Dataset file does not exist.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O failure while reading the dataset.
    #[error("failed to read dataset: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself is malformed (unbalanced quotes, bad encoding).
    #[error("malformed dataset: {message}")]
    Malformed { message: String },

    /// One or more required columns are absent from the header row.
    #[error("dataset is missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// The dataset parsed but contains no document rows.
    #[error("dataset contains no document rows")]
    EmptyDataset,

    /// Two rows share a title; titles key all per-document user state.
    #[error("duplicate document title: {title}")]
    DuplicateTitle { title: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
