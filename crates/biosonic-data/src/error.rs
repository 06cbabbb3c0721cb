//! Error types for loading classifier result files.
//!
//! Every variant that refers to something on disk carries the offending path
//! so the caller can report exactly which file broke the run.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for result loading and label mapping.
#[derive(Error, Debug)]
pub enum DataError {
    /// The results directory does not exist.
    #[error("Results directory not found: {path}")]
    DirectoryNotFound {
        /// The directory that was requested.
        path: PathBuf,
    },

    /// Walking the results directory failed part way through.
    #[error("Failed to walk directory: {path}")]
    DirectoryWalkFailed {
        /// The root of the walk.
        path: PathBuf,
        /// The underlying walkdir error.
        #[source]
        source: walkdir::Error,
    },

    /// A result file could not be read.
    #[error("Failed to read result file: {path}")]
    ReadFailed {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A result file is not a valid result record.
    #[error("Failed to parse result file: {path}")]
    ParseFailed {
        /// The malformed file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Single-prediction mode needs a top-level `class_name`.
    #[error("Record {id} has no top-level class_name")]
    MissingClassName {
        /// Identifier of the record.
        id: String,
    },
}

impl DataError {
    /// Returns `true` for errors tied to one malformed file rather than the
    /// directory as a whole.
    pub const fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::ReadFailed { .. } | Self::ParseFailed { .. } | Self::MissingClassName { .. }
        )
    }
}

/// A specialized `Result` type for data operations.
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn schema_faults_are_per_file() {
        let missing = DataError::MissingClassName {
            id: "nyctalus_noctula_002.wav".into(),
        };
        let absent_dir = DataError::DirectoryNotFound {
            path: PathBuf::from("results"),
        };

        assert!(missing.is_per_file());
        assert!(!absent_dir.is_per_file());
    }
}
