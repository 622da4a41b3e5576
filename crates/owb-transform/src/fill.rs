//! Forward fill for spreadsheet exports with merged cells.
//!
//! Exports of the Global Wellbeing Initiative workbook leave the first two
//! columns blank on continuation rows. Filling carries the last non-blank
//! value forward so every row is self-describing.

use tracing::debug;

/// Forward-fill the first two columns in place.
///
/// Rows shorter than two cells are padded with empty strings first. A cell
/// counts as blank when it is empty after trimming; blank cells receive the
/// previous non-blank value of their column verbatim.
pub fn forward_fill_rows(rows: &mut [Vec<String>]) {
    let mut last_first = String::new();
    let mut last_second = String::new();
    let mut filled = 0usize;

    for row in rows.iter_mut() {
        while row.len() < 2 {
            row.push(String::new());
        }
        if row[0].trim().is_empty() {
            row[0] = last_first.clone();
            filled += 1;
        } else {
            last_first = row[0].clone();
        }
        if row[1].trim().is_empty() {
            row[1] = last_second.clone();
            filled += 1;
        } else {
            last_second = row[1].clone();
        }
    }

    debug!(rows = rows.len(), filled, "forward fill complete");
}
