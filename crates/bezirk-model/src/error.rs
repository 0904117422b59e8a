use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A detection box must carry exactly four coordinates.
    #[error("detection box needs 4 coordinates, got {len}")]
    InvalidBox { len: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
