//! # Biosonic data
//!
//! Reading the per-recording JSON files written by `batdetect2 detect` and
//! turning them into labeled predictions:
//!
//! - [`loader`]: recursive discovery and parsing of result files
//! - [`label`]: ground-truth classes derived from recording identifiers
//! - [`predict`]: one or more (truth, prediction, confidence) pairs per record

pub mod error;
pub mod label;
pub mod loader;
pub mod predict;
pub mod record;

pub use error::{DataError, DataResult};
pub use label::{LabelStrategy, extract_true_label};
pub use loader::{
    LoadOutcome, MalformedPolicy, SkippedFile, discover_json_files, is_json_file, load_record,
    load_records,
};
pub use predict::{ConfidenceMode, LabelPair, PredictionMode, map_predictions, record_pairs};
pub use record::{Annotation, LoadedRecord, ResultRecord};
