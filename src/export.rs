use std::path::{Path, PathBuf};

use chrono::Local;

use crate::data::model::Table;
use crate::error::ExportError;

// ---------------------------------------------------------------------------
// Collision-safe export
// ---------------------------------------------------------------------------

/// How the output file in the destination directory is named. Both policies
/// probe the directory for an unused name, so a write never silently
/// overwrites a pre-existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingPolicy {
    /// `search_results_<YYYY-MM-DD_HH-MM-SS>.csv`; a same-second collision
    /// falls back to `_1`, `_2`, … suffixes.
    #[default]
    Timestamped,
    /// `result.csv`, `result_1.csv`, `result_2.csv`, …
    Incrementing,
}

/// Write `table` as a UTF-8, comma-delimited CSV file (header included,
/// rows in table order) into `dest_dir`, returning the path written.
///
/// Refuses an empty table with [`ExportError::EmptyResult`] — callers
/// surface that as a warning, not a failure. The destination directory must
/// already exist; the exporter never creates it.
pub fn write_table(
    table: &Table,
    dest_dir: &Path,
    policy: NamingPolicy,
) -> Result<PathBuf, ExportError> {
    if !dest_dir.is_dir() {
        return Err(ExportError::InvalidDestination(dest_dir.to_path_buf()));
    }
    if table.is_empty() {
        return Err(ExportError::EmptyResult);
    }

    let path = unused_path(dest_dir, policy);
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    writer.flush().map_err(ExportError::Io)?;

    log::info!("exported {} row(s) to {}", table.len(), path.display());
    Ok(path)
}

/// Probe `dest_dir` for a file name not yet taken under the given policy.
fn unused_path(dest_dir: &Path, policy: NamingPolicy) -> PathBuf {
    let base = match policy {
        NamingPolicy::Timestamped => {
            format!("search_results_{}", Local::now().format("%Y-%m-%d_%H-%M-%S"))
        }
        NamingPolicy::Incrementing => "result".to_string(),
    };

    let candidate = dest_dir.join(format!("{base}.csv"));
    if !candidate.exists() {
        return candidate;
    }
    let mut counter = 1;
    loop {
        let candidate = dest_dir.join(format!("{base}_{counter}.csv"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
