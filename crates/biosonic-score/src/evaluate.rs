//! The scoring pipeline: result files -> label pairs -> metrics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use biosonic_data::{ConfidenceMode, LabelPair, MalformedPolicy, load_records, record_pairs};
use biosonic_metric::{
    BinaryConfusion, ClassAccuracy, Score, Undefined, accuracy, macro_accuracy, pr_auc, roc_auc,
};
use serde::Serialize;

use crate::{
    config::EvalConfig,
    error::{ScoreError, ScoreResult},
};

/// Metrics computed over a set of label pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Number of label pairs scored.
    pub pairs: usize,
    /// Number of pairs that carry a confidence and enter the binary metrics.
    pub scored_pairs: usize,
    pub accuracy: f64,
    pub macro_accuracy: f64,
    pub per_class: Vec<ClassAccuracy>,
    /// Confusion counts at the configured threshold, when any pair has a
    /// confidence.
    pub confusion: Option<BinaryConfusion>,
    pub auroc: Score,
    pub balanced_accuracy: Score,
    pub auprc: Score,
}

/// Outcome of a scoring run over a results directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub directory: PathBuf,
    pub files_found: usize,
    pub skipped_files: Vec<PathBuf>,
    pub threshold: f64,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Result of [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The directory held no result files; nothing was computed.
    NoData { directory: PathBuf },
    Report(MetricReport),
}

/// Computes every metric for `pairs`.
///
/// Accuracy and macro accuracy use all pairs. The binary metrics use only
/// pairs with a confidence: the threshold is compared against the raw
/// confidence, while `confidence_mode` decides the ranking score for the
/// ROC and PR curves.
///
/// # Errors
///
/// Returns [`ScoreError::Metric`] if `pairs` is empty or a confidence is not
/// finite.
pub fn score_pairs(
    pairs: &[LabelPair],
    confidence_mode: ConfidenceMode,
    threshold: f64,
) -> ScoreResult<Metrics> {
    let truth: Vec<&str> = pairs.iter().map(|p| p.true_class.as_str()).collect();
    let predicted: Vec<&str> = pairs.iter().map(|p| p.predicted_class.as_str()).collect();

    let accuracy = accuracy(&truth, &predicted)?;
    let macro_acc = macro_accuracy(&truth, &predicted)?;

    let mut outcomes = Vec::new();
    let mut ranking = Vec::new();
    let mut correct = Vec::new();
    for pair in pairs {
        if let (Some(confidence), Some(score)) =
            (pair.confidence, pair.ranking_score(confidence_mode))
        {
            outcomes.push((pair.is_correct(), confidence));
            ranking.push(score);
            correct.push(pair.is_correct());
        }
    }

    let (confusion, auroc, balanced_accuracy, auprc) = if outcomes.is_empty() {
        tracing::warn!("no predictions carry a confidence; binary metrics are undefined");
        let undefined = Score::Undefined(Undefined::NoScores);
        (None, undefined, undefined, undefined)
    } else {
        let confusion = BinaryConfusion::from_outcomes(outcomes.iter().copied(), threshold)?;
        (
            Some(confusion),
            roc_auc(&ranking, &correct)?,
            confusion.balanced_accuracy(),
            pr_auc(&ranking, &correct)?,
        )
    };

    Ok(Metrics {
        pairs: pairs.len(),
        scored_pairs: outcomes.len(),
        accuracy,
        macro_accuracy: macro_acc.value,
        per_class: macro_acc.per_class,
        confusion,
        auroc,
        balanced_accuracy,
        auprc,
    })
}

/// Loads the results directory named in `config` and scores it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the directory cannot be
/// loaded, a record cannot be mapped to a prediction, or files exist but
/// yield no predictions at all. Under [`MalformedPolicy::Skip`] a record
/// that cannot be mapped is left out and listed with the skipped files.
pub fn evaluate(config: &EvalConfig) -> Result<Evaluation> {
    config.validate()?;

    tracing::info!(
        dir = %config.data_dir.display(),
        labels = ?config.label_strategy,
        mode = ?config.prediction_mode,
        threshold = config.threshold,
        "scoring results",
    );

    let outcome = load_records(&config.data_dir, config.malformed_policy).with_context(|| {
        format!(
            "Failed to load results from {}",
            config.data_dir.display()
        )
    })?;

    if outcome.is_empty() {
        return Ok(Evaluation::NoData {
            directory: config.data_dir.clone(),
        });
    }

    let mut skipped_files: Vec<PathBuf> = outcome.skipped.into_iter().map(|s| s.path).collect();
    let mut pairs = Vec::new();
    for loaded in &outcome.records {
        match record_pairs(
            &loaded.record,
            config.label_strategy,
            config.prediction_mode,
        ) {
            Ok(record_pairs) => pairs.extend(record_pairs),
            Err(e) if config.malformed_policy == MalformedPolicy::Skip && e.is_per_file() => {
                tracing::warn!(path = %loaded.path.display(), error = %e, "skipping result file without a usable prediction");
                skipped_files.push(loaded.path.clone());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to map predictions from {}", loaded.path.display())
                });
            }
        }
    }

    if pairs.is_empty() {
        return Err(ScoreError::NoLabelPairs {
            directory: config.data_dir.clone(),
        }
        .into());
    }

    let metrics = score_pairs(&pairs, config.confidence_mode, config.threshold)?;
    tracing::info!(pairs = metrics.pairs, "metrics computed");

    Ok(Evaluation::Report(MetricReport {
        directory: config.data_dir.clone(),
        files_found: outcome.files_found,
        skipped_files,
        threshold: config.threshold,
        metrics,
    }))
}
