use std::fmt;

// ---------------------------------------------------------------------------
// Table – one loaded CSV file (or an aggregate of several)
// ---------------------------------------------------------------------------

/// An in-memory tabular row set.
///
/// Cells are kept positionally aligned with `columns`; a `None` cell means
/// the source row was shorter than the header (an absent value never
/// matches any filter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Declared column names, in header order. Fixed once loaded.
    pub columns: Vec<String>,
    /// Row-major cell data, each row the same length as `columns`.
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create an empty table with the given column set.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether every name in `subset` is a column of this table.
    pub fn has_columns<S: AsRef<str>>(&self, subset: &[S]) -> bool {
        subset
            .iter()
            .all(|name| self.column_index(name.as_ref()).is_some())
    }

    /// Cell value at (row, column name); `None` if the column is absent or
    /// the cell itself is absent.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Filter – one (column, pattern) predicate
// ---------------------------------------------------------------------------

/// A single search predicate: case-insensitive substring containment of
/// `pattern` in the named column's cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub pattern: String,
    /// Lower-cased pattern, computed once so matching is a plain `contains`.
    pattern_lower: String,
}

impl Filter {
    /// Build a filter from raw user input. Both parts are trimmed; returns
    /// `None` when either is empty afterwards (blank form rows are not
    /// predicates).
    pub fn new(column: &str, pattern: &str) -> Option<Self> {
        let column = column.trim();
        let pattern = pattern.trim();
        if column.is_empty() || pattern.is_empty() {
            return None;
        }
        Some(Filter {
            column: column.to_string(),
            pattern: pattern.to_string(),
            pattern_lower: pattern.to_lowercase(),
        })
    }

    /// Whether a cell value satisfies this predicate. An absent cell never
    /// matches.
    pub fn matches(&self, cell: Option<&str>) -> bool {
        match cell {
            Some(value) => value.to_lowercase().contains(&self.pattern_lower),
            None => false,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~\"{}\"", self.column, self.pattern)
    }
}

// ---------------------------------------------------------------------------
// FilterSet – the ordered, conjunctive set of active predicates
// ---------------------------------------------------------------------------

/// Ordered collection of filters with AND semantics. A row must satisfy
/// every filter whose column exists in the table under test.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Build a set from raw (column, pattern) string pairs, discarding pairs
    /// that are empty after trimming.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        FilterSet {
            filters: pairs
                .into_iter()
                .filter_map(|(col, pat)| Filter::new(col, pat))
                .collect(),
        }
    }

    /// Append one predicate; silently ignored when empty after trimming.
    pub fn push(&mut self, column: &str, pattern: &str) {
        if let Some(filter) = Filter::new(column, pattern) {
            self.filters.push(filter);
        }
    }

    /// Remove every predicate.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// An empty set means "no active filters" — the search driver refuses
    /// to scan rather than returning everything unfiltered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MatchResult – filtered rows from one source file
// ---------------------------------------------------------------------------

/// The subset of one file's rows that satisfied the active filter set,
/// tagged with the originating file name. Row order is the source order.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub file_name: String,
    pub table: Table,
}
