//! Writes a small directory of sample CSV files for exercising the tool by
//! hand: two schemas, one file sharing only some columns, and one file with
//! malformed rows.
//!
//! Usage: `cargo run --bin generate_sample [OUT_DIR]` (default `sample_data/`)

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data".to_string());
    let out_dir = Path::new(&out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    write_customers(&out_dir.join("customers.csv"))?;
    write_orders(&out_dir.join("orders.csv"))?;
    write_suppliers(&out_dir.join("suppliers.csv"))?;
    write_broken(&out_dir.join("broken.csv"))?;

    println!("sample files written to {}", out_dir.display());
    println!("try: csv-sift -s {} -d {} -f city=par", out_dir.display(), out_dir.display());
    Ok(())
}

fn write_customers(path: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["name", "city", "email"])?;
    w.write_record(["Al", "Paris", "al@example.com"])?;
    w.write_record(["Ann", "Berlin", "ann@example.com"])?;
    w.write_record(["Bob", "Paris", "bob@example.com"])?;
    w.write_record(["Cleo", "Madrid", "cleo@example.com"])?;
    w.flush()?;
    Ok(())
}

fn write_orders(path: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["order_id", "name", "city", "total"])?;
    w.write_record(["1001", "Al", "Paris", "42.50"])?;
    w.write_record(["1002", "Dana", "London", "17.00"])?;
    w.write_record(["1003", "Ann", "berlin", "99.99"])?;
    w.flush()?;
    Ok(())
}

fn write_suppliers(path: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["supplier", "country"])?;
    w.write_record(["Acme", "France"])?;
    w.write_record(["Globex", "Germany"])?;
    w.flush()?;
    Ok(())
}

// Written raw on purpose: one row too wide, one too narrow.
fn write_broken(path: &Path) -> Result<()> {
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "name,city")?;
    writeln!(f, "Eve,Paris,extra,fields")?;
    writeln!(f, "Finn")?;
    writeln!(f, "Gus,Lyon")?;
    Ok(())
}
