//! Rendering of scoring results for standard output.

use std::fmt::Write as _;

use biosonic_metric::NOT_DEFINED;
use serde::{Deserialize, Serialize};

use crate::evaluate::{Evaluation, MetricReport};

/// Output format of the metric report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One labeled line per metric.
    #[default]
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

/// Renders an evaluation in `format`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(
    evaluation: &Evaluation,
    format: OutputFormat,
    per_class: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(evaluation, per_class)),
        OutputFormat::Json => render_json(evaluation),
    }
}

/// Plain-text report. Undefined metrics print as `not defined`.
pub fn render_text(evaluation: &Evaluation, per_class: bool) -> String {
    let mut out = String::new();
    match evaluation {
        Evaluation::NoData { directory } => {
            let _ = writeln!(out, "Data directory: {}", directory.display());
            let _ = writeln!(out, "Found 0 JSON files.");
            let _ = writeln!(out, "No data: no JSON files found, metrics not computed.");
        }
        Evaluation::Report(report) => write_report(&mut out, report, per_class),
    }
    out
}

fn write_report(out: &mut String, report: &MetricReport, per_class: bool) {
    let m = &report.metrics;

    let _ = writeln!(out, "Data directory: {}", report.directory.display());
    let _ = writeln!(out, "Found {} JSON files.", report.files_found);
    if !report.skipped_files.is_empty() {
        let _ = writeln!(out, "Skipped {} malformed files:", report.skipped_files.len());
        for path in &report.skipped_files {
            let _ = writeln!(out, "  {}", path.display());
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Accuracy: {:?}", m.accuracy);
    let _ = writeln!(out, "Macro-Averaged Accuracy: {:?}", m.macro_accuracy);
    let _ = writeln!(out, "AUROC: {}", m.auroc);
    let _ = writeln!(out, "Balanced Accuracy: {}", m.balanced_accuracy);
    let _ = writeln!(out, "AUPRC: {}", m.auprc);

    if !per_class {
        return;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Per-class accuracy:");
    let width = m.per_class.iter().map(|c| c.class.len()).max().unwrap_or(0);
    for class in &m.per_class {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>4}/{:<4}  {:.4}",
            class.class,
            class.correct,
            class.total,
            class.accuracy(),
        );
    }

    let _ = writeln!(out);
    match &m.confusion {
        Some(cm) => {
            let _ = writeln!(
                out,
                "Confusion at threshold {} ({} of {} predictions with confidence):",
                report.threshold, m.scored_pairs, m.pairs
            );
            let _ = writeln!(out, "  TP: {}  FN: {}", cm.true_positives, cm.false_negatives);
            let _ = writeln!(out, "  FP: {}  TN: {}", cm.false_positives, cm.true_negatives);
        }
        None => {
            let _ = writeln!(out, "Confusion: {NOT_DEFINED}");
        }
    }
}

/// JSON report. Undefined metrics serialize as `null`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(evaluation: &Evaluation) -> serde_json::Result<String> {
    match evaluation {
        Evaluation::NoData { directory } => serde_json::to_string_pretty(&serde_json::json!({
            "directory": directory,
            "files_found": 0,
            "error": "no data",
        })),
        Evaluation::Report(report) => serde_json::to_string_pretty(report),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use biosonic_metric::{BinaryConfusion, ClassAccuracy, Score, Undefined};

    use super::*;
    use crate::evaluate::Metrics;

    fn sample_report() -> Evaluation {
        Evaluation::Report(MetricReport {
            directory: PathBuf::from("data/results"),
            files_found: 2,
            skipped_files: vec![],
            threshold: 0.7,
            metrics: Metrics {
                pairs: 2,
                scored_pairs: 2,
                accuracy: 1.0,
                macro_accuracy: 1.0,
                per_class: vec![
                    ClassAccuracy::new("myotis lucifugus".into(), 1, 1),
                    ClassAccuracy::new("pipistrellus pipistrellus".into(), 1, 1),
                ],
                confusion: Some(BinaryConfusion {
                    true_positives: 2,
                    ..BinaryConfusion::default()
                }),
                auroc: Score::Undefined(Undefined::SingleClass),
                balanced_accuracy: Score::Defined(1.0),
                auprc: Score::Defined(1.0),
            },
        })
    }

    #[test]
    fn text_report_labels_every_metric() {
        let text = render_text(&sample_report(), false);

        assert!(text.contains("Found 2 JSON files."));
        assert!(text.contains("Accuracy: 1.0\n"));
        assert!(text.contains("Macro-Averaged Accuracy: 1.0\n"));
        assert!(text.contains("AUROC: not defined\n"));
        assert!(text.contains("Balanced Accuracy: 1.0\n"));
        assert!(text.contains("AUPRC: 1.0\n"));
        assert!(!text.contains("Per-class"));
    }

    #[test]
    fn text_report_with_per_class_table() {
        let text = render_text(&sample_report(), true);

        assert!(text.contains("Per-class accuracy:"));
        assert!(text.contains("pipistrellus pipistrellus"));
        assert!(text.contains("TP: 2  FN: 0"));
    }

    #[test]
    fn no_data_report() {
        let evaluation = Evaluation::NoData {
            directory: PathBuf::from("empty"),
        };
        let text = render_text(&evaluation, true);

        assert!(text.contains("Found 0 JSON files."));
        assert!(text.contains("No data"));
        assert!(!text.contains("AUROC"));
    }

    #[test]
    fn json_report_uses_null_for_undefined() {
        let json = render(&sample_report(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["accuracy"], 1.0);
        assert!(value["auroc"].is_null());
        assert_eq!(value["auprc"], 1.0);
        assert_eq!(value["confusion"]["true_positives"], 2);
        assert_eq!(value["per_class"][0]["class"], "myotis lucifugus");
    }
}
