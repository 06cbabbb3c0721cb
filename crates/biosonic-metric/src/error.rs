//! Error types for metric computation.

use thiserror::Error;

/// Error type for metric computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// A metric was asked for over zero samples.
    #[error("Cannot compute {metric} over an empty sample")]
    EmptyInput {
        /// Name of the metric.
        metric: &'static str,
    },

    /// Paired inputs have different lengths.
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the first input.
        expected: usize,
        /// Length of the second input.
        actual: usize,
    },

    /// A ranking score is NaN or infinite.
    #[error("Score at index {index} is not finite: {value}")]
    NonFiniteScore {
        /// Position of the offending score.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

/// A specialized `Result` type for metric computation.
pub type MetricResult<T> = Result<T, MetricError>;

pub(crate) fn check_lengths(expected: usize, actual: usize) -> MetricResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(MetricError::LengthMismatch { expected, actual })
    }
}
