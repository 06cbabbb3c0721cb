//! Plain and macro-averaged accuracy over class labels.
//!
//! Labels are compared after lower-casing both sides, since derived truth and
//! classifier output do not agree on casing.

use std::collections::BTreeMap;

use derive_new::new;
use serde::Serialize;

use crate::error::{MetricError, MetricResult, check_lengths};

/// Correct-prediction tally for one true class.
#[derive(new, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassAccuracy {
    pub class: String,
    pub correct: usize,
    pub total: usize,
}

impl ClassAccuracy {
    /// Fraction of this class's samples that were predicted correctly.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Macro-averaged accuracy together with its per-class breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroAccuracy {
    /// Unweighted mean of per-class accuracies.
    pub value: f64,
    /// One entry per distinct true class, ignoring case, sorted by class name.
    pub per_class: Vec<ClassAccuracy>,
}

/// Case-insensitive label equality.
pub fn labels_match(truth: &str, predicted: &str) -> bool {
    truth.to_lowercase() == predicted.to_lowercase()
}

/// Fraction of samples whose predicted label equals the true label.
///
/// # Errors
///
/// Fails on empty or mismatched inputs.
pub fn accuracy<T, P>(truth: &[T], predicted: &[P]) -> MetricResult<f64>
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    check_lengths(truth.len(), predicted.len())?;
    if truth.is_empty() {
        return Err(MetricError::EmptyInput { metric: "accuracy" });
    }

    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| labels_match(t.as_ref(), p.as_ref()))
        .count();
    Ok(correct as f64 / truth.len() as f64)
}

/// Accuracy computed per true class, then averaged with equal class weight.
///
/// # Errors
///
/// Fails on empty or mismatched inputs.
pub fn macro_accuracy<T, P>(truth: &[T], predicted: &[P]) -> MetricResult<MacroAccuracy>
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    check_lengths(truth.len(), predicted.len())?;
    if truth.is_empty() {
        return Err(MetricError::EmptyInput {
            metric: "macro-averaged accuracy",
        });
    }

    // Keyed by the lower-cased label; the first spelling seen is displayed.
    let mut tallies: BTreeMap<String, (&str, usize, usize)> = BTreeMap::new();
    for (t, p) in truth.iter().zip(predicted) {
        let entry = tallies
            .entry(t.as_ref().to_lowercase())
            .or_insert((t.as_ref(), 0, 0));
        if labels_match(t.as_ref(), p.as_ref()) {
            entry.1 += 1;
        }
        entry.2 += 1;
    }

    let per_class: Vec<ClassAccuracy> = tallies
        .into_values()
        .map(|(class, correct, total)| ClassAccuracy::new(class.to_owned(), correct, total))
        .collect();
    let value = per_class.iter().map(ClassAccuracy::accuracy).sum::<f64>() / per_class.len() as f64;

    Ok(MacroAccuracy { value, per_class })
}
