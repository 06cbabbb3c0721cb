//! Schema of the per-file JSON written by `batdetect2 detect`.
//!
//! Only the fields scoring needs are modeled. Everything else in the file
//! (`annotated`, `issues`, `notes`, `time_exp`, ...) is ignored on read.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One classifier result file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Identifier of the processed recording, normally its file name.
    pub id: String,
    /// Overall predicted class for the recording.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Individual detections, in the order the classifier emitted them.
    #[serde(default)]
    pub annotation: Vec<Annotation>,
}

/// A single detection inside a result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Predicted class of this detection.
    pub class: String,
    /// Confidence of `class`, in `[0, 1]`.
    pub class_prob: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub det_prob: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_freq: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_freq: Option<f64>,
}

impl ResultRecord {
    /// Highest `class_prob` among detections whose class matches `class`,
    /// ignoring case.
    pub fn best_confidence_for(&self, class: &str) -> Option<f64> {
        let class = class.to_lowercase();
        self.annotation
            .iter()
            .filter(|a| a.class.to_lowercase() == class)
            .map(|a| a.class_prob)
            .fold(None, |best, p| match best {
                Some(b) if b >= p => Some(b),
                _ => Some(p),
            })
    }
}

/// A record together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub record: ResultRecord,
}
