//! `biosonic-score`: scores batdetect2 species predictions.
//!
//! Result files are loaded from a directory, each recording's true class is
//! read from its identifier, and the classifier's predictions are compared
//! against it. Label derivation, prediction granularity, confidence handling
//! and the positive threshold are all explicit settings in [`EvalConfig`].
//!
//! ```rust,no_run
//! use biosonic_score::{EvalConfig, OutputFormat, evaluate, report};
//!
//! # fn main() -> anyhow::Result<()> {
//! let evaluation = evaluate(&EvalConfig::new("data/results"))?;
//! print!("{}", report::render(&evaluation, OutputFormat::Text, false)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod evaluate;
pub mod report;

#[doc(inline)]
pub use biosonic_data as data;
#[doc(inline)]
pub use biosonic_metric as metric;

pub use config::{DEFAULT_DATA_DIR, EvalConfig};
pub use error::{ScoreError, ScoreResult};
pub use evaluate::{Evaluation, MetricReport, Metrics, evaluate, score_pairs};
pub use report::OutputFormat;
