use anyhow::{bail, Context, Result};
use clap::Parser;

use csv_sift::cli::{parse_filter_arg, Cli};
use csv_sift::error::ExportError;
use csv_sift::session::SearchSession;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = SearchSession::new(&cli.source, &cli.dest);
    session.naming = cli.naming.into();
    session.projection = cli.columns.clone();

    for arg in &cli.filter {
        match parse_filter_arg(arg) {
            Some((column, pattern)) => session.add_filter(column, pattern),
            None => bail!("invalid --filter '{arg}', expected COLUMN=PATTERN"),
        }
    }

    let outcome = session.search()?;

    for skipped in &outcome.skipped {
        log::warn!("skipped {}: {}", skipped.file_name, skipped.reason);
    }
    if !outcome.skipped.is_empty() {
        eprintln!(
            "warning: {} file(s) could not be loaded and were skipped",
            outcome.skipped.len()
        );
    }

    if !cli.quiet {
        for (file_name, row) in session.preview_rows() {
            let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
            println!("{file_name}: {}", cells.join(","));
        }
    }

    if cli.create_dest && !cli.dest.is_dir() {
        std::fs::create_dir_all(&cli.dest)
            .with_context(|| format!("creating destination {}", cli.dest.display()))?;
    }

    match session.export() {
        Ok(path) => {
            println!("results exported to {}", path.display());
            Ok(())
        }
        // Nothing matched: a warning for the user, not a failing run.
        Err(ExportError::EmptyResult) => {
            eprintln!("warning: no search results to export");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
