//! Long-form cleaning: canonical `value` column plus metadata-column drops.
//!
//! This is the light-touch variant that preserves all substantive columns
//! instead of pivoting. It copes with the naming drift across OECD SDMX
//! exports by probing a fixed list of observation-value synonyms.

use tracing::debug;

use owb_model::{ReshapeError, Result, Table};

/// Observation-value column synonyms, probed in order.
pub const VALUE_CANDIDATES: [&str; 4] = [
    "obs_value",
    "observation_value",
    "observationvalue",
    "value",
];

/// SDMX structural metadata columns that carry no substance for charting.
pub const DROP_COLUMNS: [&str; 9] = [
    "structure",
    "structure_id",
    "structure_name",
    "action",
    "unit_mult",
    "unit_multiplier",
    "decimals",
    "base_per",
    "base_period",
];

/// Produce the cleaned long table: all substantive columns plus a canonical
/// `value` column copied from the first present synonym.
///
/// Expects normalized headers. Fails when none of the synonyms is present.
pub fn clean_long(table: &Table) -> Result<Table> {
    let value_index = VALUE_CANDIDATES
        .iter()
        .find_map(|candidate| table.column_index(candidate))
        .ok_or_else(|| ReshapeError::MissingValueColumn {
            candidates: VALUE_CANDIDATES.join(", "),
        })?;

    let mut kept = Vec::new();
    let mut columns = Vec::new();
    for (index, name) in table.columns.iter().enumerate() {
        if DROP_COLUMNS.contains(&name.as_str()) {
            continue;
        }
        kept.push(index);
        columns.push(name.clone());
    }

    // The canonical column overwrites an existing `value` column, otherwise
    // it is appended after the kept columns.
    let value_position = columns.iter().position(|name| name == "value");
    if value_position.is_none() {
        columns.push("value".to_string());
    }

    let mut clean = Table::new(columns);
    for row in &table.rows {
        let value = row.get(value_index).cloned().unwrap_or_default();
        let mut cells: Vec<String> = kept
            .iter()
            .map(|&index| row.get(index).cloned().unwrap_or_default())
            .collect();
        match value_position {
            Some(position) => cells[position] = value,
            None => cells.push(value),
        }
        clean.push_row(cells);
    }

    debug!(
        rows = clean.height(),
        columns = clean.width(),
        dropped = table.width() - kept.len(),
        "long-form clean complete"
    );
    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::{DROP_COLUMNS, clean_long};
    use owb_model::{ReshapeError, Table};

    #[test]
    fn copies_first_synonym_into_value_column() {
        let mut table = Table::new(vec![
            "measure".to_string(),
            "obs_value".to_string(),
        ]);
        table.push_row(vec!["a".to_string(), "7.1".to_string()]);

        let clean = clean_long(&table).expect("clean");
        assert_eq!(clean.columns, vec!["measure", "obs_value", "value"]);
        assert_eq!(clean.cell(0, 2), "7.1");
    }

    #[test]
    fn existing_value_column_is_overwritten_not_duplicated() {
        let mut table = Table::new(vec![
            "obs_value".to_string(),
            "value".to_string(),
        ]);
        table.push_row(vec!["1".to_string(), "stale".to_string()]);

        let clean = clean_long(&table).expect("clean");
        assert_eq!(clean.columns, vec!["obs_value", "value"]);
        assert_eq!(clean.cell(0, 1), "1");
    }

    #[test]
    fn drops_structural_metadata_columns() {
        let mut columns = vec!["measure".to_string(), "obs_value".to_string()];
        columns.extend(DROP_COLUMNS.iter().map(|name| (*name).to_string()));
        let mut table = Table::new(columns);
        let mut row = vec!["a".to_string(), "1".to_string()];
        row.extend(DROP_COLUMNS.iter().map(|_| "meta".to_string()));
        table.push_row(row);

        let clean = clean_long(&table).expect("clean");
        assert_eq!(clean.columns, vec!["measure", "obs_value", "value"]);
    }

    #[test]
    fn fails_without_any_value_synonym() {
        let table = Table::new(vec!["measure".to_string(), "time_period".to_string()]);
        let error = clean_long(&table).unwrap_err();
        assert!(matches!(error, ReshapeError::MissingValueColumn { .. }));
    }

    #[test]
    fn probes_synonyms_in_order() {
        let mut table = Table::new(vec![
            "observationvalue".to_string(),
            "observation_value".to_string(),
        ]);
        table.push_row(vec!["second".to_string(), "first".to_string()]);

        let clean = clean_long(&table).expect("clean");
        // observation_value outranks observationvalue in the candidate list.
        assert_eq!(clean.cell(0, 2), "first");
    }
}
