use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a rule set.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("failed to read rule file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid rule file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("street rule {index} has an empty marker")]
    EmptyMarker { index: usize },

    /// Street keys are lowercase without whitespace, so this marker never matches.
    #[error("street rule {index} marker {marker:?} can never match a normalized street name")]
    UnmatchableMarker { index: usize, marker: String },

    #[error("street rule {street:?} has an inverted range {from}..={to}")]
    InvertedRange {
        street: String,
        from: String,
        to: String,
    },

    #[error("street rule {street:?} has a branch without a district")]
    EmptyDistrict { street: String },
}

pub type Result<T> = std::result::Result<T, RuleSetError>;
