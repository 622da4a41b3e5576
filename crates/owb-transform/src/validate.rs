//! Presence checks for the semantic fields the wide pipeline relies on.

use owb_model::{ReshapeError, Result, Table};

/// Fields the wide pipeline requires after header normalization.
pub const REQUIRED_FIELDS: [&str; 4] = ["measure", "reference_area", "time_period", "obs_value"];

/// Confirm every required field is present, naming the first one missing.
///
/// No partial processing: a missing field aborts the whole run.
pub fn require_fields(table: &Table, fields: &[&str]) -> Result<()> {
    for field in fields {
        if !table.has_column(field) {
            return Err(ReshapeError::MissingField {
                column: (*field).to_string(),
            });
        }
    }
    Ok(())
}
