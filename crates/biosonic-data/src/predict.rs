//! Turns result records into (truth, prediction, confidence) pairs.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DataError, DataResult},
    label::{LabelStrategy, extract_true_label},
    record::ResultRecord,
};

/// Granularity of predictions taken from each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionMode {
    /// One prediction per record, from its top-level `class_name`.
    #[default]
    Single,
    /// One prediction per detection in `annotation`.
    Multi,
}

/// Score used to rank a pair for the ROC and PR curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceMode {
    /// The classifier's confidence as reported.
    #[default]
    Raw,
    /// `1 - class_prob` for wrong predictions, so the score reads as
    /// confidence that the negative outcome is right.
    InvertOnMismatch,
}

/// A derived true class paired with one prediction.
#[derive(new, Debug, Clone, PartialEq, Serialize)]
pub struct LabelPair {
    /// Class derived from the record identifier.
    pub true_class: String,
    /// Class predicted by the classifier, lower-cased.
    pub predicted_class: String,
    /// Classifier confidence in `predicted_class`, when known.
    pub confidence: Option<f64>,
    /// Identifier of the record the pair came from.
    pub source_id: String,
}

impl LabelPair {
    /// Whether the prediction names the true class, ignoring case.
    pub fn is_correct(&self) -> bool {
        biosonic_metric::labels_match(&self.true_class, &self.predicted_class)
    }

    /// Ranking score for this pair under `mode`.
    pub fn ranking_score(&self, mode: ConfidenceMode) -> Option<f64> {
        let confidence = self.confidence?;
        Some(match mode {
            ConfidenceMode::InvertOnMismatch if !self.is_correct() => 1.0 - confidence,
            _ => confidence,
        })
    }
}

/// Builds the label pairs for one record.
///
/// # Errors
///
/// Returns [`DataError::MissingClassName`] in [`PredictionMode::Single`] when
/// the record has no `class_name`.
pub fn record_pairs(
    record: &ResultRecord,
    strategy: LabelStrategy,
    mode: PredictionMode,
) -> DataResult<Vec<LabelPair>> {
    let true_class = extract_true_label(&record.id, strategy);

    match mode {
        PredictionMode::Single => {
            let class_name =
                record
                    .class_name
                    .as_deref()
                    .ok_or_else(|| DataError::MissingClassName {
                        id: record.id.clone(),
                    })?;
            Ok(vec![LabelPair::new(
                true_class,
                class_name.to_lowercase(),
                record.best_confidence_for(class_name),
                record.id.clone(),
            )])
        }
        PredictionMode::Multi => {
            if record.annotation.is_empty() {
                tracing::debug!(id = %record.id, "record has no detections");
            }
            Ok(record
                .annotation
                .iter()
                .map(|a| {
                    LabelPair::new(
                        true_class.clone(),
                        a.class.to_lowercase(),
                        Some(a.class_prob),
                        record.id.clone(),
                    )
                })
                .collect())
        }
    }
}

/// Builds label pairs for every record, preserving record order.
///
/// # Errors
///
/// Propagates the first [`record_pairs`] failure.
pub fn map_predictions<'a, I>(
    records: I,
    strategy: LabelStrategy,
    mode: PredictionMode,
) -> DataResult<Vec<LabelPair>>
where
    I: IntoIterator<Item = &'a ResultRecord>,
{
    let mut pairs = Vec::new();
    for record in records {
        pairs.extend(record_pairs(record, strategy, mode)?);
    }
    Ok(pairs)
}
