use std::fs::File;
use std::io::Write;

use rstest::rstest;
use shot_config::load_history_csv;
use tempfile::tempdir;

#[rstest]
fn csv_with_all_columns_parses() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.csv");

    let mut f = File::create(&path).unwrap();
    writeln!(f, "id,volume,duration_ms,dose_in,dose_out,ratio,roast_level").unwrap();
    writeln!(f, "001,36.5,29000,18.0,36.0,,light").unwrap();
    writeln!(f, "002,0,31000,18.0,,2.0,").unwrap();

    let rows = load_history_csv(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "001");
    assert_eq!(rows[0].volume, Some(36.5));
    assert_eq!(rows[0].notes.roast_level.as_deref(), Some("light"));
    assert_eq!(rows[1].volume, Some(0.0));
    assert_eq!(rows[1].notes.dose_out, None);
    assert_eq!(rows[1].notes.ratio, Some(2.0));
}

#[rstest]
fn csv_with_missing_header_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad_headers.csv");

    let mut f = File::create(&path).unwrap();
    writeln!(f, "id,volume,duration").unwrap();
    writeln!(f, "1,36.0,29000").unwrap();

    let err = load_history_csv(&path).expect_err("should error on bad headers");
    assert!(format!("{err}").contains("history CSV must have headers"));
}

#[rstest]
fn csv_with_non_numeric_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad_numeric.csv");

    let mut f = File::create(&path).unwrap();
    writeln!(f, "id,volume,duration_ms,dose_in,dose_out,ratio,roast_level").unwrap();
    writeln!(f, "1,lots,29000,18,36,,").unwrap();

    let err = load_history_csv(&path).expect_err("should error on non-numeric");
    assert!(format!("{err}").contains("invalid CSV row 2"));
}

#[rstest]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    let err = load_history_csv(&path).expect_err("missing file");
    assert!(format!("{err}").contains("open history CSV"));
}
