//! # Biosonic metrics
//!
//! Classification metrics for species predictions, computed over plain slices:
//!
//! - [`accuracy`] and [`macro_accuracy`] over class labels
//! - [`BinaryConfusion`] and balanced accuracy at a confidence threshold
//! - [`roc_auc`] and [`pr_auc`] over ranking scores
//!
//! Metrics that can be mathematically undefined return a [`Score`], which is
//! either a number or an explicit [`Undefined`] marker.

pub mod accuracy;
pub mod confusion;
pub mod curve;
pub mod error;
pub mod score;

pub use accuracy::{ClassAccuracy, MacroAccuracy, accuracy, labels_match, macro_accuracy};
pub use confusion::{BinaryConfusion, DEFAULT_THRESHOLD};
pub use curve::{PrPoint, RocPoint, pr_auc, pr_curve, roc_auc, roc_curve};
pub use error::{MetricError, MetricResult};
pub use score::{NOT_DEFINED, Score, Undefined};
