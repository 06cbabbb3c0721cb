//! ROC and precision-recall curves with trapezoidal areas.
//!
//! Samples are ranked by descending score. Samples sharing a score form one
//! threshold step, so ties never depend on input order.

use serde::Serialize;

use crate::{
    error::{MetricError, MetricResult, check_lengths},
    score::{Score, Undefined},
};

/// One point of a ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub threshold: f64,
    /// FP / (FP + TN).
    pub fpr: f64,
    /// TP / (TP + FN).
    pub tpr: f64,
}

/// One point of a precision-recall curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrPoint {
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
}

/// Cumulative (threshold, tp, fp) counts, one entry per distinct score.
fn threshold_steps(scores: &[f64], labels: &[bool]) -> Vec<(f64, usize, usize)> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut steps = Vec::new();
    let (mut tp, mut fp) = (0usize, 0usize);
    let mut i = 0;
    while i < order.len() {
        let current = scores[order[i]];
        while i < order.len() && scores[order[i]] == current {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        steps.push((current, tp, fp));
    }
    steps
}

fn validate(scores: &[f64], labels: &[bool], metric: &'static str) -> MetricResult<()> {
    check_lengths(scores.len(), labels.len())?;
    if scores.is_empty() {
        return Err(MetricError::EmptyInput { metric });
    }
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(MetricError::NonFiniteScore { index, value });
    }
    Ok(())
}

/// Builds the ROC curve, from (0, 0) to (1, 1).
///
/// Returns `Ok(None)` when `labels` holds a single class, since the curve is
/// undefined without both positives and negatives.
///
/// # Errors
///
/// Fails on empty, mismatched or non-finite inputs.
pub fn roc_curve(scores: &[f64], labels: &[bool]) -> MetricResult<Option<Vec<RocPoint>>> {
    validate(scores, labels, "AUROC")?;

    let positives = labels.iter().filter(|&&l| l).count();
    let negatives = labels.len() - positives;
    if positives == 0 || negatives == 0 {
        return Ok(None);
    }

    let (p, n) = (positives as f64, negatives as f64);
    let mut points = vec![RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    }];
    points.extend(
        threshold_steps(scores, labels)
            .into_iter()
            .map(|(threshold, tp, fp)| RocPoint {
                threshold,
                fpr: fp as f64 / n,
                tpr: tp as f64 / p,
            }),
    );
    Ok(Some(points))
}

/// Area under the ROC curve.
///
/// A single-class truth vector yields [`Undefined::SingleClass`] without
/// building the curve.
///
/// # Errors
///
/// Fails on empty, mismatched or non-finite inputs.
pub fn roc_auc(scores: &[f64], labels: &[bool]) -> MetricResult<Score> {
    Ok(match roc_curve(scores, labels)? {
        Some(points) => Score::Defined(trapezoidal_area(
            points.iter().map(|p| (p.fpr, p.tpr)),
        )),
        None => Score::Undefined(Undefined::SingleClass),
    })
}

/// Builds the precision-recall curve, starting at recall 0, precision 1.
///
/// Returns `Ok(None)` when `labels` has no positives.
///
/// # Errors
///
/// Fails on empty, mismatched or non-finite inputs.
pub fn pr_curve(scores: &[f64], labels: &[bool]) -> MetricResult<Option<Vec<PrPoint>>> {
    validate(scores, labels, "AUPRC")?;

    let positives = labels.iter().filter(|&&l| l).count();
    if positives == 0 {
        return Ok(None);
    }

    let p = positives as f64;
    let mut points = vec![PrPoint {
        threshold: f64::INFINITY,
        precision: 1.0,
        recall: 0.0,
    }];
    points.extend(
        threshold_steps(scores, labels)
            .into_iter()
            .map(|(threshold, tp, fp)| PrPoint {
                threshold,
                precision: tp as f64 / (tp + fp) as f64,
                recall: tp as f64 / p,
            }),
    );
    Ok(Some(points))
}

/// Area under the precision-recall curve, integrated over recall.
///
/// # Errors
///
/// Fails on empty, mismatched or non-finite inputs.
pub fn pr_auc(scores: &[f64], labels: &[bool]) -> MetricResult<Score> {
    Ok(match pr_curve(scores, labels)? {
        Some(points) => Score::Defined(trapezoidal_area(
            points.iter().map(|p| (p.recall, p.precision)),
        )),
        None => Score::Undefined(Undefined::NoPositives),
    })
}

fn trapezoidal_area<I: IntoIterator<Item = (f64, f64)>>(points: I) -> f64 {
    let mut iter = points.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0.0;
    };
    let mut area = 0.0;
    for (x, y) in iter {
        area += (x - prev.0).abs() * (y + prev.1) / 2.0;
        prev = (x, y);
    }
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(score: Score, expected: f64) {
        let value = score.value().expect("score should be defined");
        assert!((value - expected).abs() < 1e-9, "{value} != {expected}");
    }

    #[test]
    fn perfect_ranking() {
        let scores = [0.9, 0.8, 0.3, 0.2];
        let labels = [true, true, false, false];

        approx(roc_auc(&scores, &labels).unwrap(), 1.0);
        approx(pr_auc(&scores, &labels).unwrap(), 1.0);
    }

    #[test]
    fn inverted_ranking() {
        let scores = [0.1, 0.2, 0.8, 0.9];
        let labels = [true, true, false, false];

        approx(roc_auc(&scores, &labels).unwrap(), 0.0);
    }

    #[test]
    fn interleaved_ranking() {
        let scores = [0.9, 0.7, 0.5, 0.3];
        let labels = [true, false, true, false];

        approx(roc_auc(&scores, &labels).unwrap(), 0.75);
        // (0,1) -> (0.5,1) -> (0.5,0.5) -> (1,0.667) -> (1,0.5)
        approx(pr_auc(&scores, &labels).unwrap(), 0.5 + 0.5 * (0.5 + 2.0 / 3.0) / 2.0);
    }

    #[test]
    fn ties_form_a_single_step() {
        let scores = [0.5, 0.5];
        approx(roc_auc(&scores, &[true, false]).unwrap(), 0.5);
        approx(roc_auc(&scores, &[false, true]).unwrap(), 0.5);

        let curve = roc_curve(&scores, &[true, false]).unwrap().unwrap();
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn single_class_roc_is_undefined() {
        let scores = [0.9, 0.8];
        assert_eq!(
            roc_auc(&scores, &[true, true]).unwrap(),
            Score::Undefined(Undefined::SingleClass)
        );
        assert_eq!(
            roc_auc(&scores, &[false, false]).unwrap(),
            Score::Undefined(Undefined::SingleClass)
        );
        assert!(roc_curve(&scores, &[true, true]).unwrap().is_none());
    }

    #[test]
    fn pr_without_positives_is_undefined() {
        assert_eq!(
            pr_auc(&[0.4, 0.6], &[false, false]).unwrap(),
            Score::Undefined(Undefined::NoPositives)
        );
    }

    #[test]
    fn pr_with_only_positives_is_one() {
        approx(pr_auc(&[0.9, 0.8], &[true, true]).unwrap(), 1.0);
    }

    #[test]
    fn roc_curve_spans_unit_square() {
        let curve = roc_curve(&[0.9, 0.7, 0.5, 0.3], &[true, false, true, false])
            .unwrap()
            .unwrap();
        let first = curve.first().unwrap();
        let last = curve.last().unwrap();
        assert_eq!((first.fpr, first.tpr), (0.0, 0.0));
        assert_eq!((last.fpr, last.tpr), (1.0, 1.0));
    }

    #[test]
    fn invalid_inputs_are_errors() {
        assert!(matches!(
            roc_auc(&[], &[]),
            Err(MetricError::EmptyInput { metric: "AUROC" })
        ));
        assert!(matches!(
            pr_auc(&[0.5], &[true, false]),
            Err(MetricError::LengthMismatch { .. })
        ));
        assert!(matches!(
            roc_auc(&[0.5, f64::NAN], &[true, false]),
            Err(MetricError::NonFiniteScore { index: 1, .. })
        ));
    }
}
