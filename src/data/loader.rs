use std::path::Path;

use crate::data::model::Table;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// CSV Table Loader
// ---------------------------------------------------------------------------

/// Load one CSV file into a [`Table`].
///
/// The file must carry a header row; the header defines the table's column
/// set. Data rows are tolerated rather than trusted:
/// * a row with FEWER fields than the header is padded with absent cells
/// * a row with MORE fields than the header is skipped outright
///
/// Only a failure that prevents producing even the header (unreadable file,
/// invalid UTF-8, broken quoting at the top) yields a [`LoadError`]; the
/// caller treats that as "file skipped", never as a batch abort.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::new(path, source))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::new(path, source))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let width = columns.len();
    let mut table = Table::with_columns(columns);
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                // Unparseable line, not a structural failure of the file.
                log::debug!("{}: unparseable row skipped: {err}", path.display());
                skipped += 1;
                continue;
            }
        };
        if record.len() > width {
            skipped += 1;
            continue;
        }
        let mut row: Vec<Option<String>> =
            record.iter().map(|cell| Some(cell.to_string())).collect();
        row.resize(width, None);
        table.rows.push(row);
    }

    if skipped > 0 {
        log::debug!(
            "{}: skipped {skipped} malformed row(s), kept {}",
            path.display(),
            table.len()
        );
    }
    Ok(table)
}
