/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  directory of .csv files
///        │  (one file at a time)
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  columns + rows of optional string cells
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply (column, pattern) predicates → MatchResult
///   └──────────┘
///        │  (per-file results)
///        ▼
///   ┌──────────┐
///   │ aggregate │  union of match tables → one combined Table
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
