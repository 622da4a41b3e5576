//! CSV file reading.
//!
//! Files are loaded whole into memory and every cell is kept as text to
//! avoid type-inference surprises in mixed SDMX exports.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use owb_model::{ReshapeError, Result, Table};

/// Text encodings accepted for input files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputEncoding {
    /// UTF-8, falling back to Windows-1252 when the bytes are not valid UTF-8.
    #[default]
    Utf8,
    /// Windows-1252, the usual encoding of spreadsheet exports.
    Latin1,
}

fn decode(path: &Path, encoding: InputEncoding) -> Result<String> {
    let bytes = fs::read(path)?;
    match encoding {
        InputEncoding::Utf8 => match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(error) => {
                debug!(path = %path.display(), "input is not valid UTF-8, decoding as Windows-1252");
                let bytes = error.into_bytes();
                let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
                Ok(text.into_owned())
            }
        },
        InputEncoding::Latin1 => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(text.into_owned())
        }
    }
}

fn csv_error(path: &Path, error: &csv::Error) -> ReshapeError {
    ReshapeError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`Table`].
///
/// The first record supplies the column headers (raw, not yet normalized);
/// every data row is padded or truncated to the header width. Cells are
/// trimmed and BOM-stripped.
pub fn read_table(path: &Path, encoding: InputEncoding) -> Result<Table> {
    let text = decode(path, encoding)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(path, &error))?
        .iter()
        .map(normalize_cell)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        let mut row = Vec::with_capacity(columns.len());
        for index in 0..columns.len() {
            row.push(normalize_cell(record.get(index).unwrap_or("")));
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "loaded table"
    );
    Ok(Table { columns, rows })
}

/// Read a CSV file as raw records, without header interpretation.
///
/// Used by the forward-fill cleaner, which must preserve every row (header
/// included) and every cell byte-for-byte apart from re-encoding.
pub fn read_rows(path: &Path, encoding: InputEncoding) -> Result<Vec<Vec<String>>> {
    let text = decode(path, encoding)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded raw rows");
    Ok(rows)
}
