//! Error types for Inventory Board.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading an inventory document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the document from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The HTTP request failed or returned a non-success status.
    #[error("failed to fetch '{url}': {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The payload is not valid JSON.
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    /// The JSON is valid but cannot describe an inventory.
    #[error("invalid document: {message}")]
    InvalidShape { message: String },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
