//! Error types for Medalboard.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Medalboard operations.
pub type Result<T> = std::result::Result<T, MedalboardError>;

/// Errors that can occur in Medalboard.
#[derive(Debug, Error)]
pub enum MedalboardError {
    /// Failed to open a data file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or parse a CSV file.
    #[error("Failed to read CSV from {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from a file header.
    #[error("Missing column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A cell could not be interpreted.
    #[error("Invalid value '{value}' for {field} in {path} (row {row})")]
    InvalidValue {
        path: PathBuf,
        field: &'static str,
        value: String,
        row: usize,
    },

    /// The people and medal files share no identifiers.
    #[error("No medal rows matched a person; check the 'id' columns of {people} and {medals}")]
    EmptyJoin { people: PathBuf, medals: PathBuf },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MedalboardError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Csv error.
    pub fn csv(path: PathBuf, source: csv::Error) -> Self {
        Self::Csv { path, source }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(path: PathBuf, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path,
            column: column.into(),
        }
    }
}
