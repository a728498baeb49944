use std::path::PathBuf;

use crate::data::filter::aggregate;
use crate::data::model::{FilterSet, Table};
use crate::error::{ExportError, SearchError};
use crate::export::{write_table, NamingPolicy};
use crate::search::{scan_directory, CancelToken, ScanOutcome};

// ---------------------------------------------------------------------------
// Request-scoped search session
// ---------------------------------------------------------------------------

/// One search-then-export cycle's worth of state, independent of any front
/// end. An interactive form drives it through `add_filter` / `search` /
/// `export`; the batch CLI sets everything up and runs the two steps once.
pub struct SearchSession {
    /// Directory scanned for `.csv` files.
    pub source_dir: PathBuf,
    /// Directory the export artifact is written into.
    pub dest_dir: PathBuf,
    /// Ordered, conjunctive predicates.
    pub filters: FilterSet,
    /// Column projection applied at export time (matches in the preview are
    /// never projected).
    pub projection: Option<Vec<String>>,
    /// Naming policy for the export artifact.
    pub naming: NamingPolicy,
    /// Outcome of the most recent scan, if any.
    pub outcome: Option<ScanOutcome>,
    /// Cooperative cancellation handle, shared with the front end.
    pub cancel: CancelToken,
}

impl SearchSession {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        SearchSession {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            filters: FilterSet::default(),
            projection: None,
            naming: NamingPolicy::default(),
            outcome: None,
            cancel: CancelToken::new(),
        }
    }

    /// Append one (column, pattern) predicate; blank input is discarded.
    pub fn add_filter(&mut self, column: &str, pattern: &str) {
        self.filters.push(column, pattern);
    }

    /// Drop all predicates and any previous results.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.outcome = None;
    }

    /// Run the directory scan with the current filter set. Replaces any
    /// previous outcome on success; on refusal (bad directory, no active
    /// filters) the previous outcome is left untouched.
    pub fn search(&mut self) -> Result<&ScanOutcome, SearchError> {
        let outcome = scan_directory(&self.source_dir, &self.filters, &self.cancel)?;
        log::info!(
            "search matched {} row(s) across {} file(s), {} skipped",
            outcome.match_count(),
            outcome.files_scanned,
            outcome.skipped.len()
        );
        Ok(self.outcome.insert(outcome))
    }

    /// `(file_name, row cells)` pairs for a results-preview surface, in scan
    /// order. Always unprojected: the display shows every matched row even
    /// when the export projection will exclude some files.
    pub fn preview_rows(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.outcome
            .iter()
            .flat_map(|o| o.matches.iter())
            .flat_map(|m| {
                m.table
                    .rows
                    .iter()
                    .map(move |row| (m.file_name.as_str(), row.as_slice()))
            })
    }

    /// Fold the per-file match results into the combined table that would
    /// be exported (projection applied).
    pub fn aggregate_result(&self) -> Table {
        let matches = self
            .outcome
            .as_ref()
            .map(|o| o.matches.as_slice())
            .unwrap_or(&[]);
        aggregate(matches, self.projection.as_deref())
    }

    /// Write the aggregate result into the destination directory. Refuses
    /// with `EmptyResult` when nothing matched (or the projection excluded
    /// every contributing file); prior exports are never overwritten.
    pub fn export(&self) -> Result<PathBuf, ExportError> {
        write_table(&self.aggregate_result(), &self.dest_dir, self.naming)
    }
}
