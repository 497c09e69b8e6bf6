//! Error types for kmernext.
//!
//! Data-level oddities (empty input, sequences shorter than k, `k <= 0`) are
//! never errors; only I/O failures and unparseable arguments surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmernext operations.
#[derive(Debug, Error)]
pub enum KmerNextError {
    /// K-mer length argument is not an integer.
    #[error("invalid k-mer length '{value}': must be an integer")]
    InvalidKmerLength { value: String },

    /// Failed to open or read the input.
    #[error("failed to read input '{path}': {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to create or write the output file.
    #[error("failed to write output '{path}': {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for KmerNextError {
    fn from(source: serde_json::Error) -> Self {
        KmerNextError::Json { source }
    }
}
