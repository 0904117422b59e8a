//! Error types for street table import and recognition replies.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while importing external input.
///
/// Malformed table lines are not errors; they are reported as
/// [`crate::SkippedLine`] diagnostics.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Table file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Table file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Table file is not UTF-8 text.
    #[error("{path} is not valid UTF-8 text")]
    Encoding { path: PathBuf },

    /// Recognition reply was not the expected JSON object.
    #[error("invalid recognition reply: {0}")]
    RecognitionReply(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
