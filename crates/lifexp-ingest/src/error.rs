//! Error types for source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Delimited Errors ===
    /// File has no header row.
    #[error("delimited file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Record could not be decoded.
    #[error("failed to parse delimited file {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Data row carries more fields than the header.
    #[error("line {line} of {path} has {found} fields, header has {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    // === Archive Errors ===
    /// Zip archive could not be opened or an entry could not be read.
    #[error("corrupt archive {path}: {message}")]
    CorruptArchive { path: PathBuf, message: String },

    /// Archive holds no entry ending in `.json`.
    #[error("no .json entry in archive {path}")]
    NoJsonEntry { path: PathBuf },

    /// JSON entry is not an array of flat objects.
    #[error("malformed JSON in {entry} of {path}: {message}")]
    MalformedJson {
        path: PathBuf,
        entry: String,
        message: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Maps an open/read failure, distinguishing a missing file.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
