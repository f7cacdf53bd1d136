// Error types for certsearch
//
// Structured error types using thiserror so the binary boundary can report
// each failure class with a single descriptive line.

use std::io;
use thiserror::Error;

/// Main error type for certsearch operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Upstream endpoint answered with a non-200 status
    #[error("crt.sh request failed (status {status}): {details}")]
    HttpStatus { status: u16, details: String },

    /// Network-level failure contacting the upstream endpoint
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Response body could not be decoded into certificate records
    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// Unrecognized sort key or otherwise invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Output file could not be created
    #[error("File system error: {path}: {source}")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error while writing output
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: io::Error,
    },
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::ParseError {
            message: err.to_string(),
        }
    }
}
