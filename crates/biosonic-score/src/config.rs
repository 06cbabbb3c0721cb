//! Configuration for a scoring run.
//!
//! Every choice the old per-variant scripts hard-coded is a field here. The
//! defaults reproduce the reference script: first-digit labels, one
//! prediction per file, raw confidences, a 0.7 threshold, abort on bad files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use biosonic_data::{ConfidenceMode, LabelStrategy, MalformedPolicy, PredictionMode};
use biosonic_metric::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};

/// Results directory used when none is given.
pub const DEFAULT_DATA_DIR: &str = "data/results";

/// Settings for one evaluation over a results directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Directory searched recursively for `.json` result files.
    pub data_dir: PathBuf,
    /// How true classes are derived from identifiers.
    pub label_strategy: LabelStrategy,
    /// One prediction per file or one per detection.
    pub prediction_mode: PredictionMode,
    /// Ranking score used for the ROC and PR curves.
    pub confidence_mode: ConfidenceMode,
    /// Confidence at or above which a prediction counts as positive.
    pub threshold: f64,
    /// What to do with unreadable or malformed result files.
    pub malformed_policy: MalformedPolicy,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            label_strategy: LabelStrategy::default(),
            prediction_mode: PredictionMode::default(),
            confidence_mode: ConfidenceMode::default(),
            threshold: DEFAULT_THRESHOLD,
            malformed_policy: MalformedPolicy::default(),
        }
    }
}

impl EvalConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Reads a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    #[must_use]
    pub fn with_label_strategy(mut self, label_strategy: LabelStrategy) -> Self {
        self.label_strategy = label_strategy;
        self
    }

    #[must_use]
    pub fn with_prediction_mode(mut self, prediction_mode: PredictionMode) -> Self {
        self.prediction_mode = prediction_mode;
        self
    }

    #[must_use]
    pub fn with_confidence_mode(mut self, confidence_mode: ConfidenceMode) -> Self {
        self.confidence_mode = confidence_mode;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_malformed_policy(mut self, malformed_policy: MalformedPolicy) -> Self {
        self.malformed_policy = malformed_policy;
        self
    }

    /// Checks that the configuration can be used for a run.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidConfiguration`] if the threshold is not a
    /// finite value in `[0, 1]`.
    pub fn validate(&self) -> ScoreResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ScoreError::InvalidConfiguration {
                reason: format!("threshold must be within [0, 1], got {}", self.threshold),
            });
        }
        Ok(())
    }
}
