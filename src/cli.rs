use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::export::NamingPolicy;

/// Scan a directory of CSV files, keep the rows matching every filter, and
/// export the combined result to a new file.
#[derive(Parser)]
#[command(name = "csv-sift", version)]
pub struct Cli {
    /// Directory containing the .csv files to scan (non-recursive)
    #[arg(long, short = 's')]
    pub source: PathBuf,

    /// Directory the result file is written into
    #[arg(long, short = 'd')]
    pub dest: PathBuf,

    /// Filter as COLUMN=PATTERN (case-insensitive substring match);
    /// repeat for multiple conjunctive filters
    #[arg(long, short = 'f', value_name = "COLUMN=PATTERN", required = true)]
    pub filter: Vec<String>,

    /// Comma-separated column names to project the exported file onto;
    /// files missing any of them are excluded from the export
    #[arg(long, value_delimiter = ',', value_name = "COL,...")]
    pub columns: Option<Vec<String>>,

    /// Naming policy for the result file
    #[arg(long, value_enum, default_value = "timestamp")]
    pub naming: Naming,

    /// Create the destination directory if it does not exist
    #[arg(long)]
    pub create_dest: bool,

    /// Suppress the per-row match preview on stdout
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Naming {
    /// search_results_<timestamp>.csv
    Timestamp,
    /// result.csv, result_1.csv, ...
    Increment,
}

impl From<Naming> for NamingPolicy {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Timestamp => NamingPolicy::Timestamped,
            Naming::Increment => NamingPolicy::Incrementing,
        }
    }
}

/// Split a `COLUMN=PATTERN` argument at the first `=`.
pub fn parse_filter_arg(arg: &str) -> Option<(&str, &str)> {
    arg.split_once('=')
}
