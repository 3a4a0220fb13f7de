//! Error types for numint-io

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] numint_core::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data row that cannot be turned into a sample; `row` is 1-based
    #[error("Row {row} {reason}")]
    InvalidRow { row: u64, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The wrapped integration error, if any
    pub fn as_core(&self) -> Option<&numint_core::Error> {
        match self {
            Error::Core(e) => Some(e),
            _ => None,
        }
    }
}
