//! Column inspection helpers.

use std::collections::BTreeSet;

use owb_model::{ReshapeError, Result, Table};

/// Distinct values of a column in first-seen order.
pub fn distinct_values(table: &Table, column: &str) -> Result<Vec<String>> {
    let index = table
        .column_index(column)
        .ok_or_else(|| ReshapeError::MissingField {
            column: column.to_string(),
        })?;

    let mut seen = BTreeSet::new();
    let mut values = Vec::new();
    for row in &table.rows {
        let value = row.get(index).map_or("", String::as_str);
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}
