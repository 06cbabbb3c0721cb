//! Recursive discovery and parsing of classifier result files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::{
    error::{DataError, DataResult},
    record::{LoadedRecord, ResultRecord},
};

/// What to do when a single result file cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedPolicy {
    /// Stop at the first bad file.
    #[default]
    Abort,
    /// Log the bad file, remember it and keep loading.
    Skip,
}

/// A file that was left out under [`MalformedPolicy::Skip`].
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of loading a results directory.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Number of `.json` files discovered.
    pub files_found: usize,
    /// Successfully parsed records, in path order.
    pub records: Vec<LoadedRecord>,
    /// Files rejected under [`MalformedPolicy::Skip`].
    pub skipped: Vec<SkippedFile>,
}

impl LoadOutcome {
    /// `true` when the directory held no result files at all.
    pub const fn is_empty(&self) -> bool {
        self.files_found == 0
    }
}

/// Checks whether `path` has a `.json` extension, ignoring case.
pub fn is_json_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Finds every `.json` file below `dir`, in path order.
///
/// Siblings are visited by file name, so the walk itself yields paths sorted
/// component by component.
///
/// # Errors
///
/// Returns [`DataError::DirectoryNotFound`] if `dir` is not a directory and
/// [`DataError::DirectoryWalkFailed`] if an entry cannot be visited.
pub fn discover_json_files(dir: &Path) -> DataResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DataError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| DataError::DirectoryWalkFailed {
            path: dir.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_file() && is_json_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Reads and parses one result file.
///
/// # Errors
///
/// Returns [`DataError::ReadFailed`] or [`DataError::ParseFailed`] with the
/// offending path.
pub fn load_record(path: &Path) -> DataResult<ResultRecord> {
    let contents = fs::read_to_string(path).map_err(|source| DataError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DataError::ParseFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every result record below `dir`.
///
/// An empty directory is not an error: it is logged as a warning and an
/// empty [`LoadOutcome`] comes back.
///
/// # Errors
///
/// Fails if the directory cannot be walked, or on the first malformed file
/// when `policy` is [`MalformedPolicy::Abort`].
pub fn load_records(dir: &Path, policy: MalformedPolicy) -> DataResult<LoadOutcome> {
    let files = discover_json_files(dir)?;
    tracing::info!(count = files.len(), dir = %dir.display(), "found JSON files");

    if files.is_empty() {
        tracing::warn!(dir = %dir.display(), "no JSON files found in directory");
        return Ok(LoadOutcome::default());
    }

    let mut outcome = LoadOutcome {
        files_found: files.len(),
        records: Vec::with_capacity(files.len()),
        skipped: Vec::new(),
    };

    for path in files {
        tracing::debug!(path = %path.display(), "loading result file");
        match load_record(&path) {
            Ok(record) => outcome.records.push(LoadedRecord { path, record }),
            Err(e) if policy == MalformedPolicy::Skip && e.is_per_file() => {
                let reason = match &e {
                    DataError::ParseFailed { source, .. } => source.to_string(),
                    DataError::ReadFailed { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                tracing::warn!(path = %path.display(), error = %reason, "skipping malformed result file");
                outcome.skipped.push(SkippedFile { path, reason });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcome)
}
