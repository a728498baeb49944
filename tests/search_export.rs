//! End-to-end scenarios: scan a real directory, filter, aggregate, export,
//! and re-load the artifact.

use std::io::Write;
use std::path::Path;

use csv_sift::data::loader::load_table;
use csv_sift::data::model::FilterSet;
use csv_sift::error::{ExportError, SearchError};
use csv_sift::export::NamingPolicy;
use csv_sift::search::{scan_directory, CancelToken};
use csv_sift::session::SearchSession;

fn write_file(dir: &Path, name: &str, body: &str) {
    let mut f = std::fs::File::create(dir.join(name)).unwrap();
    f.write_all(body.as_bytes()).unwrap();
}

/// Two same-schema files, one filter matching one row in one file.
#[test]
fn single_filter_matches_one_file() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_file(src.path(), "a.csv", "name,city\nAl,Paris\n");
    write_file(src.path(), "b.csv", "name,city\nAnn,Berlin\n");

    let mut session = SearchSession::new(src.path(), dst.path());
    session.naming = NamingPolicy::Incrementing;
    session.add_filter("city", "par");

    let outcome = session.search().unwrap();
    assert_eq!(outcome.files_scanned, 2);
    assert_eq!(outcome.match_count(), 1);
    assert_eq!(outcome.matches[0].file_name, "a.csv");

    let path = session.export().unwrap();
    let exported = load_table(&path).unwrap();
    assert_eq!(exported.columns, vec!["name", "city"]);
    assert_eq!(exported.len(), 1);
    assert_eq!(exported.cell(0, "name"), Some("Al"));
    assert_eq!(exported.cell(0, "city"), Some("Paris"));
}

/// Conjunctive filters with no common row: export is refused, not failed.
#[test]
fn conjunctive_filters_with_no_overlap_refuse_export() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_file(src.path(), "a.csv", "name,city\nAl,Paris\n");
    write_file(src.path(), "b.csv", "name,city\nAnn,Berlin\n");

    let mut session = SearchSession::new(src.path(), dst.path());
    session.add_filter("city", "par");
    session.add_filter("name", "z");

    let outcome = session.search().unwrap();
    assert_eq!(outcome.match_count(), 0);
    assert!(matches!(session.export(), Err(ExportError::EmptyResult)));
    assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 0);
}

/// A filter on a column no file has is vacuously true everywhere.
#[test]
fn filter_on_unknown_column_keeps_every_row() {
    let src = tempfile::tempdir().unwrap();
    write_file(src.path(), "a.csv", "name,city\nAl,Paris\n");
    write_file(src.path(), "b.csv", "name,city\nAnn,Berlin\n");

    let filters = FilterSet::from_pairs(vec![("country", "fr")]);
    let outcome = scan_directory(src.path(), &filters, &CancelToken::new()).unwrap();
    assert_eq!(outcome.match_count(), 2);
}

/// Export then re-load: identical column set and row values.
#[test]
fn exported_artifact_round_trips_through_the_loader() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_file(
        src.path(),
        "a.csv",
        "name,city,age\nAl,Paris,40\nBob,paris west,35\n",
    );

    let mut session = SearchSession::new(src.path(), dst.path());
    session.naming = NamingPolicy::Incrementing;
    session.add_filter("city", "PAR");
    session.search().unwrap();

    let original = session.aggregate_result();
    let path = session.export().unwrap();
    let reloaded = load_table(&path).unwrap();

    assert_eq!(reloaded.columns, original.columns);
    assert_eq!(reloaded.rows, original.rows);
}

/// Exporting twice must never overwrite the first artifact.
#[test]
fn repeated_exports_produce_distinct_files() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_file(src.path(), "a.csv", "name,city\nAl,Paris\n");

    let mut session = SearchSession::new(src.path(), dst.path());
    session.naming = NamingPolicy::Incrementing;
    session.add_filter("city", "par");
    session.search().unwrap();

    let first = session.export().unwrap();
    let second = session.export().unwrap();
    assert_ne!(first, second);
    assert_eq!(load_table(&first).unwrap().len(), 1);
    assert_eq!(load_table(&second).unwrap().len(), 1);

    session.naming = NamingPolicy::Timestamped;
    let third = session.export().unwrap();
    let fourth = session.export().unwrap();
    assert_ne!(third, fourth);
}

/// Projection excludes files missing a requested column from the export,
/// while the preview still shows their matches.
#[test]
fn projection_gates_export_but_not_preview() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_file(src.path(), "a.csv", "name,city\nAl,Porto\n");
    write_file(src.path(), "b.csv", "name,city,email\nPark,Oslo,p@example.com\n");

    let mut session = SearchSession::new(src.path(), dst.path());
    session.naming = NamingPolicy::Incrementing;
    session.projection = Some(vec!["name".to_string(), "email".to_string()]);
    session.add_filter("city", "o");

    session.search().unwrap();
    // Both files match in the preview ("Porto" and "Oslo" both contain "o")...
    assert_eq!(session.preview_rows().count(), 2);

    // ...but only b.csv carries the full projection column set.
    let path = session.export().unwrap();
    let exported = load_table(&path).unwrap();
    assert_eq!(exported.columns, vec!["name", "email"]);
    assert_eq!(exported.len(), 1);
    assert_eq!(exported.cell(0, "name"), Some("Park"));
}

/// A file that fails to load is reported and skipped; the batch continues.
#[test]
fn unloadable_file_is_skipped_and_reported() {
    let src = tempfile::tempdir().unwrap();
    write_file(src.path(), "a.csv", "name,city\nAl,Paris\n");
    // Invalid UTF-8 in the header makes the whole file unloadable.
    std::fs::write(src.path().join("bad.csv"), b"na\xffme,city\nAl,Paris\n").unwrap();

    let filters = FilterSet::from_pairs(vec![("city", "par")]);
    let outcome = scan_directory(src.path(), &filters, &CancelToken::new()).unwrap();
    assert_eq!(outcome.match_count(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].file_name, "bad.csv");
}

#[test]
fn invalid_source_directory_aborts_before_io() {
    let filters = FilterSet::from_pairs(vec![("city", "par")]);
    let err = scan_directory(Path::new("/no/such/place"), &filters, &CancelToken::new());
    assert!(matches!(err, Err(SearchError::InvalidDirectory(_))));
}

#[test]
fn invalid_destination_fails_the_export() {
    let src = tempfile::tempdir().unwrap();
    write_file(src.path(), "a.csv", "name,city\nAl,Paris\n");

    let mut session = SearchSession::new(src.path(), "/no/such/place");
    session.add_filter("city", "par");
    session.search().unwrap();
    assert!(matches!(
        session.export(),
        Err(ExportError::InvalidDestination(_))
    ));
}
