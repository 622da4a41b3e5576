use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use owb_ingest::{InputEncoding, normalize_columns, read_rows, read_table};

fn write_fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn reads_all_cells_as_text() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(
        &dir,
        "input.csv",
        b"MEASURE,OBS_VALUE\nLife satisfaction,7.4\nLife satisfaction,\n",
    );

    let table = read_table(&path, InputEncoding::Utf8).expect("read table");
    assert_eq!(table.columns, vec!["MEASURE", "OBS_VALUE"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, 1), "7.4");
    assert_eq!(table.cell(1, 1), "");
}

#[test]
fn pads_short_rows_to_header_width() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, "short.csv", b"a,b,c\n1,2\n");

    let table = read_table(&path, InputEncoding::Utf8).expect("read table");
    assert_eq!(table.rows, vec![vec!["1", "2", ""]]);
}

#[test]
fn falls_back_to_windows_1252() {
    let dir = TempDir::new().expect("temp dir");
    // 0xE9 is "é" in Windows-1252 and invalid UTF-8 on its own.
    let path = write_fixture(&dir, "latin.csv", b"country,value\nR\xE9union,1\n");

    let table = read_table(&path, InputEncoding::Utf8).expect("read table");
    assert_eq!(table.cell(0, 0), "Réunion");
}

#[test]
fn latin1_reads_raw_rows_including_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, "raw.csv", b"Region,Country\n,\xC5land\n");

    let rows = read_rows(&path, InputEncoding::Latin1).expect("read rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["Region", "Country"]);
    assert_eq!(rows[1], vec!["", "Åland"]);
}

#[test]
fn normalization_composes_with_reading() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(
        &dir,
        "dupes.csv",
        b"Reference Area,REFERENCE AREA,Obs Value\nFrance,Francia,7.1\n",
    );

    let table = read_table(&path, InputEncoding::Utf8).expect("read table");
    let table = normalize_columns(table, false);
    assert_eq!(table.columns, vec!["reference_area", "obs_value"]);
    assert_eq!(table.rows, vec![vec!["France", "7.1"]]);
}
