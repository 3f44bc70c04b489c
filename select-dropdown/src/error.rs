//! Error types for catalog loading and submission checks

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no destinations")]
    EmptyCatalog,

    #[error("Duplicate destination in catalog: {0}")]
    DuplicateCandidate(String),

    #[error("Broad region is not a catalog destination: {0}")]
    UnknownBroadRegion(String),

    #[error("Preselected destination is not in the catalog: {0}")]
    UnknownPreselected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select at least one {noun}")]
    Empty { noun: String },
}
