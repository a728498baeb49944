use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------
//
// Per-file failures (`LoadError`) are skip-and-continue: the scan logs them,
// records them in the outcome, and moves on. Directory- and export-level
// failures abort the current operation and are surfaced verbatim. No retries
// anywhere.

/// A single file could not be loaded. Never fatal to a directory scan.
#[derive(Debug, Error)]
#[error("failed to load {}: {source}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: csv::Error,
}

impl LoadError {
    pub fn new(path: &std::path::Path, source: csv::Error) -> Self {
        LoadError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Failures that abort a directory scan before or during iteration.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Source directory does not exist; refused before any I/O.
    #[error("invalid source directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// Every supplied filter was empty after trimming; refused before
    /// scanning rather than returning the whole directory unfiltered.
    #[error("no active filters")]
    NoActiveFilters,

    /// Cooperative cancellation between files.
    #[error("search cancelled")]
    Cancelled,

    /// Directory listing itself failed.
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of the export step. `EmptyResult` is reported to the user as a
/// warning, not an error; the rest abort the export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Destination directory does not exist (the exporter never creates it).
    #[error("invalid destination directory: {}", .0.display())]
    InvalidDestination(PathBuf),

    /// Nothing matched; there is no artifact to write.
    #[error("no search results to export")]
    EmptyResult,

    #[error("failed to write results: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
}
