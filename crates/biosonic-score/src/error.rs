use std::path::PathBuf;

use biosonic_data::DataError;
use biosonic_metric::MetricError;
use thiserror::Error;

/// The error type for scoring runs.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// Configuration values are out of range or inconsistent.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// Result files were found but none produced a prediction to score.
    #[error("No data: no predictions to score in {directory}")]
    NoLabelPairs {
        /// The results directory.
        directory: PathBuf,
    },

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Metric(#[from] MetricError),
}

/// A specialized `Result` type for scoring runs.
pub type ScoreResult<T> = Result<T, ScoreError>;
