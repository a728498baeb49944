use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::data::filter::apply_filters;
use crate::data::loader::load_table;
use crate::data::model::{FilterSet, MatchResult};
use crate::error::SearchError;

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Cooperative cancellation flag, checked between files (never mid-file).
/// Clone the token and hand it to whatever drives the user-facing "stop"
/// control; the scan polls it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Directory scan
// ---------------------------------------------------------------------------

/// A file the scan could not load. Recorded, logged, never fatal.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// Everything one directory scan produced: per-file match results (only the
/// non-empty ones, in scan order) plus the skipped-files report.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub matches: Vec<MatchResult>,
    pub skipped: Vec<SkippedFile>,
    /// Number of .csv files successfully loaded (matched or not).
    pub files_scanned: usize,
}

impl ScanOutcome {
    /// Total number of matching rows across all files.
    pub fn match_count(&self) -> usize {
        self.matches.iter().map(|m| m.table.len()).sum()
    }
}

/// Scan `dir` for `.csv` files (non-recursive), filter each one, and collect
/// the per-file results.
///
/// Refused up front, before any file I/O:
/// * `InvalidDirectory` when `dir` does not exist
/// * `NoActiveFilters` when the filter set is empty
///
/// Files are visited in file-name order so the outcome (and any later
/// aggregation) is deterministic regardless of what order the OS lists the
/// directory in. Each file is loaded, filtered, and released before the
/// next one is opened; a file that fails to load is logged and recorded in
/// `skipped`, and the scan continues.
pub fn scan_directory(
    dir: &Path,
    filters: &FilterSet,
    cancel: &CancelToken,
) -> Result<ScanOutcome, SearchError> {
    if !dir.is_dir() {
        return Err(SearchError::InvalidDirectory(dir.to_path_buf()));
    }
    if filters.is_empty() {
        return Err(SearchError::NoActiveFilters);
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|source| SearchError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_csv(path))
        .collect();
    entries.sort();

    let mut outcome = ScanOutcome::default();

    for path in entries {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let table = match load_table(&path) {
            Ok(table) => table,
            Err(err) => {
                log::warn!("skipping {file_name}: {err}");
                outcome.skipped.push(SkippedFile {
                    file_name,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        outcome.files_scanned += 1;

        let matched = apply_filters(&table, filters);
        log::debug!("{file_name}: {} of {} row(s) matched", matched.len(), table.len());
        if !matched.is_empty() {
            outcome.matches.push(MatchResult {
                file_name,
                table: matched,
            });
        }
    }

    Ok(outcome)
}

fn is_csv(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
