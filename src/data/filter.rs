use super::model::{Filter, FilterSet, MatchResult, Table};

// ---------------------------------------------------------------------------
// Filter engine: conjunctive (column, pattern) predicates over one table
// ---------------------------------------------------------------------------

/// Return the subset of `table`'s rows satisfying every applicable filter.
///
/// A row passes a filter when:
/// * the filter's column is absent from the table → passes (vacuously true
///   for this table; the filter constrains other files, not this one)
/// * the cell is present and contains the pattern, case-insensitively
/// * an absent cell never matches
///
/// Pure and order-preserving: the output rows are a subsequence of the
/// input rows. O(rows × filters) containment checks.
pub fn apply_filters(table: &Table, filters: &FilterSet) -> Table {
    // Resolve column positions once per table, not once per row.
    let applicable: Vec<(&Filter, usize)> = filters
        .iter()
        .filter_map(|f| table.column_index(&f.column).map(|idx| (f, idx)))
        .collect();

    let rows = table
        .rows
        .iter()
        .filter(|row| {
            applicable
                .iter()
                .all(|(filter, idx)| filter.matches(row.get(*idx).and_then(|c| c.as_deref())))
        })
        .cloned()
        .collect();

    Table {
        columns: table.columns.clone(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Aggregation: fold per-file match results into one table
// ---------------------------------------------------------------------------

/// Concatenate per-file match tables into a single table, in input order.
/// Row identity resets; no cross-file index meaning is preserved.
///
/// Without a projection, the combined column set is the first-seen union of
/// all contributing column sets and cells missing from a given file stay
/// absent. With a projection, only files whose table contains EVERY
/// requested column contribute, and the output columns are exactly the
/// projection in requested order — the stricter policy, so an exported
/// artifact never carries half-filled projection columns.
///
/// Zero inputs (or zero contributing files) yield an empty table, never an
/// error.
pub fn aggregate(results: &[MatchResult], projection: Option<&[String]>) -> Table {
    match projection {
        Some(columns) => aggregate_projected(results, columns),
        None => aggregate_union(results),
    }
}

fn aggregate_union(results: &[MatchResult]) -> Table {
    let mut columns: Vec<String> = Vec::new();
    for result in results {
        for col in &result.table.columns {
            if !columns.contains(col) {
                columns.push(col.clone());
            }
        }
    }

    let mut combined = Table::with_columns(columns);
    for result in results {
        // Map source column positions into the combined layout.
        let mapping: Vec<Option<usize>> = result
            .table
            .columns
            .iter()
            .map(|col| combined.column_index(col))
            .collect();
        for row in &result.table.rows {
            let mut out = vec![None; combined.columns.len()];
            for (src_idx, dst_idx) in mapping.iter().enumerate() {
                if let Some(dst_idx) = dst_idx {
                    out[*dst_idx] = row.get(src_idx).cloned().flatten();
                }
            }
            combined.rows.push(out);
        }
    }
    combined
}

fn aggregate_projected(results: &[MatchResult], columns: &[String]) -> Table {
    let mut combined = Table::with_columns(columns.to_vec());
    for result in results {
        if !result.table.has_columns(columns) {
            log::debug!(
                "{}: missing projection column(s), excluded from export",
                result.file_name
            );
            continue;
        }
        let indices: Vec<usize> = columns
            .iter()
            .map(|col| result.table.column_index(col).unwrap())
            .collect();
        for row in &result.table.rows {
            combined
                .rows
                .push(indices.iter().map(|&i| row.get(i).cloned().flatten()).collect());
        }
    }
    combined
}
