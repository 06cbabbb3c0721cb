//! Binary confusion counts for "was the prediction right" vs. confidence.
//!
//! Each sample is reduced to whether its predicted label matched the truth
//! and how confident the classifier was. A sample counts as predicted
//! positive when its confidence reaches the threshold.

use serde::Serialize;

use crate::{
    error::{MetricError, MetricResult},
    score::{Score, Undefined},
};

/// Confidence threshold applied when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// True/false positive/negative counts at one confidence threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BinaryConfusion {
    /// Correct label, confidence at or above threshold.
    pub true_positives: usize,
    /// Correct label, confidence below threshold.
    pub false_negatives: usize,
    /// Wrong label, confidence at or above threshold.
    pub false_positives: usize,
    /// Wrong label, confidence below threshold.
    pub true_negatives: usize,
}

impl BinaryConfusion {
    /// Tallies `(correct, confidence)` outcomes against `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError::NonFiniteScore`] for a NaN or infinite
    /// confidence.
    pub fn from_outcomes<I>(outcomes: I, threshold: f64) -> MetricResult<Self>
    where
        I: IntoIterator<Item = (bool, f64)>,
    {
        let mut cm = Self::default();
        for (index, (correct, confidence)) in outcomes.into_iter().enumerate() {
            if !confidence.is_finite() {
                return Err(MetricError::NonFiniteScore {
                    index,
                    value: confidence,
                });
            }
            cm.record(correct, confidence >= threshold);
        }
        Ok(cm)
    }

    fn record(&mut self, correct: bool, confident: bool) {
        match (correct, confident) {
            (true, true) => self.true_positives += 1,
            (true, false) => self.false_negatives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
        }
    }

    pub const fn total(&self) -> usize {
        self.true_positives + self.false_negatives + self.false_positives + self.true_negatives
    }

    /// Samples whose prediction was correct.
    pub const fn positives(&self) -> usize {
        self.true_positives + self.false_negatives
    }

    /// Samples whose prediction was wrong.
    pub const fn negatives(&self) -> usize {
        self.false_positives + self.true_negatives
    }

    /// Recall of the positive class, if it has any samples.
    pub fn sensitivity(&self) -> Option<f64> {
        ratio(self.true_positives, self.positives())
    }

    /// Recall of the negative class, if it has any samples.
    pub fn specificity(&self) -> Option<f64> {
        ratio(self.true_negatives, self.negatives())
    }

    /// Mean recall over the binary classes present in the truth.
    ///
    /// A class with no samples is left out of the mean rather than counted
    /// as zero, so an all-correct sample scores 1.0.
    pub fn balanced_accuracy(&self) -> Score {
        let recalls: Vec<f64> = [self.sensitivity(), self.specificity()]
            .into_iter()
            .flatten()
            .collect();
        if recalls.is_empty() {
            return Score::Undefined(Undefined::NoScores);
        }
        Score::Defined(recalls.iter().sum::<f64>() / recalls.len() as f64)
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}
