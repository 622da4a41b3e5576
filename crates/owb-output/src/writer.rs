//! CSV output.
//!
//! Output is always UTF-8, regardless of the input encoding. File handles
//! are scoped to these calls; flushing before return guarantees release on
//! success and failure alike.

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use owb_model::{ReshapeError, Result, Table};

fn csv_error(path: &Path, error: &csv::Error) -> ReshapeError {
    ReshapeError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Serialize a table: header record first, then data rows in table order.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;
    writer
        .write_record(&table.columns)
        .map_err(|error| csv_error(path, &error))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|error| csv_error(path, &error))?;
    }
    writer.flush()?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote table"
    );
    Ok(())
}

/// Serialize raw records without header handling.
///
/// Rows may differ in length; used by the forward-fill cleaner which echoes
/// the input shape.
pub fn write_rows(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|error| csv_error(path, &error))?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "wrote raw rows");
    Ok(())
}
