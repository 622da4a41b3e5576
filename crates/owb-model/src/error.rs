use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a reshaping run.
///
/// Every variant is fatal: the pipeline has one terminal failure state per
/// stage and never produces partial output.
#[derive(Debug, Error)]
pub enum ReshapeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input or output failure.
    #[error("csv error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// None of the known observation-value column synonyms is present.
    #[error("could not find the observation value column (tried: {candidates})")]
    MissingValueColumn { candidates: String },

    /// A required semantic field is absent after header normalization.
    #[error("missing column: {column}")]
    MissingField { column: String },

    /// `time_period` did not parse as an integer year.
    #[error("malformed year {value:?} in data row {row}")]
    MalformedYear { row: usize, value: String },
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
