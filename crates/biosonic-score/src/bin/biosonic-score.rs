//! Scores a directory of batdetect2 result files.
//!
//! ```bash
//! # Score ./data/results with the reference settings
//! biosonic-score
//!
//! # One prediction per detection, genus/species labels
//! biosonic-score results/ --mode multi --label-strategy genus-species
//!
//! # Keep going past malformed files and print JSON
//! biosonic-score results/ --on-malformed skip --format json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use biosonic_score::{
    EvalConfig, OutputFormat,
    data::{ConfidenceMode, LabelStrategy, MalformedPolicy, PredictionMode},
    evaluate, report,
};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory searched recursively for result JSON files [default: data/results]
    data_dir: Option<PathBuf>,

    /// How true classes are read from identifiers (first-digit, genus-species)
    #[arg(long, value_parser = parse_kebab::<LabelStrategy>)]
    label_strategy: Option<LabelStrategy>,

    /// One prediction per file or per detection (single, multi)
    #[arg(long, value_parser = parse_kebab::<PredictionMode>)]
    mode: Option<PredictionMode>,

    /// Ranking score for AUROC/AUPRC (raw, invert-on-mismatch)
    #[arg(long, value_parser = parse_kebab::<ConfidenceMode>)]
    confidence: Option<ConfidenceMode>,

    /// Confidence at or above which a prediction counts as positive
    #[arg(short, long)]
    threshold: Option<f64>,

    /// What to do with malformed result files (abort, skip)
    #[arg(long, value_parser = parse_kebab::<MalformedPolicy>)]
    on_malformed: Option<MalformedPolicy>,

    /// Report format (text, json)
    #[arg(long, default_value = "text", value_parser = parse_kebab::<OutputFormat>)]
    format: OutputFormat,

    /// Also print per-class accuracy and confusion counts
    #[arg(long)]
    per_class: bool,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Parses a kebab-case enum value the same way config files spell it.
fn parse_kebab<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_owned()))
        .map_err(|e| format!("invalid value '{value}': {e}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => EvalConfig::from_json_file(path)?,
        None => EvalConfig::default(),
    };

    // Apply command line overrides
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(strategy) = args.label_strategy {
        config.label_strategy = strategy;
    }
    if let Some(mode) = args.mode {
        config.prediction_mode = mode;
    }
    if let Some(confidence) = args.confidence {
        config.confidence_mode = confidence;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(policy) = args.on_malformed {
        config.malformed_policy = policy;
    }

    let evaluation = evaluate(&config)?;
    print!("{}", report::render(&evaluation, args.format, args.per_class)?);
    Ok(())
}
