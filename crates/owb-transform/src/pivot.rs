//! Long-to-wide reshaping: one row per (country, year), one column per
//! measure identifier.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use owb_model::{ReshapeError, Result, Table, variable_id};

fn required_index(table: &Table, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| ReshapeError::MissingField {
            column: column.to_string(),
        })
}

/// Pivot the filtered long table into wide form.
///
/// The cell for a (country, year, measure) triple is the `obs_value` of the
/// first matching record in input order; later duplicates are discarded
/// silently. Combinations with no record stay empty. Output rows are sorted
/// by country (lexicographic) then year (ascending); columns are `country`,
/// `year`, then variable identifiers in first-appearance order.
pub fn pivot_wide(table: &Table) -> Result<Table> {
    let country_index = required_index(table, "reference_area")?;
    let year_index = required_index(table, "time_period")?;
    let measure_index = required_index(table, "measure")?;
    let value_index = required_index(table, "obs_value")?;

    let mut variable_columns: Vec<String> = Vec::new();
    let mut seen_variables: BTreeSet<String> = BTreeSet::new();
    let mut cells: BTreeMap<(String, i32), BTreeMap<String, String>> = BTreeMap::new();

    for (row_index, row) in table.rows.iter().enumerate() {
        let country = row.get(country_index).map_or("", String::as_str);
        let raw_year = row.get(year_index).map_or("", String::as_str);
        let year = crate::filter::parse_year(raw_year, row_index)?;
        let measure = row.get(measure_index).map_or("", String::as_str);
        let value = row.get(value_index).map_or("", String::as_str);

        let variable = variable_id(measure);
        if seen_variables.insert(variable.clone()) {
            variable_columns.push(variable.clone());
        }
        cells
            .entry((country.to_string(), year))
            .or_default()
            .entry(variable)
            .or_insert_with(|| value.to_string());
    }

    let mut columns = Vec::with_capacity(variable_columns.len() + 2);
    columns.push("country".to_string());
    columns.push("year".to_string());
    columns.extend(variable_columns.iter().cloned());

    let mut wide = Table::new(columns);
    for ((country, year), values) in cells {
        let mut row = Vec::with_capacity(wide.width());
        row.push(country);
        row.push(year.to_string());
        for variable in &variable_columns {
            row.push(values.get(variable).cloned().unwrap_or_default());
        }
        wide.push_row(row);
    }

    debug!(
        rows = wide.height(),
        variables = variable_columns.len(),
        "pivot complete"
    );
    Ok(wide)
}

#[cfg(test)]
mod tests {
    use super::pivot_wide;
    use owb_model::Table;

    fn long_table(rows: &[(&str, &str, &str, &str)]) -> Table {
        let mut table = Table::new(vec![
            "measure".to_string(),
            "reference_area".to_string(),
            "time_period".to_string(),
            "obs_value".to_string(),
        ]);
        for (measure, country, year, value) in rows {
            table.push_row(vec![
                (*measure).to_string(),
                (*country).to_string(),
                (*year).to_string(),
                (*value).to_string(),
            ]);
        }
        table
    }

    #[test]
    fn one_row_per_country_year() {
        let table = long_table(&[
            ("Life Satisfaction", "FRA", "2010", "7.1"),
            ("Life Satisfaction", "FRA", "2011", "7.2"),
            ("Life Satisfaction", "USA", "2010", "6.9"),
        ]);
        let wide = pivot_wide(&table).expect("pivot");
        assert_eq!(wide.columns, vec!["country", "year", "life_satisfaction"]);
        assert_eq!(wide.rows.len(), 3);
    }

    #[test]
    fn first_record_wins_for_duplicate_triples() {
        let table = long_table(&[
            ("Life Satisfaction", "FRA", "2010", "7.1"),
            ("Life Satisfaction", "FRA", "2010", "9.9"),
        ]);
        let wide = pivot_wide(&table).expect("pivot");
        assert_eq!(wide.rows.len(), 1);
        assert_eq!(wide.cell(0, 2), "7.1");
    }

    #[test]
    fn missing_combinations_stay_empty() {
        let table = long_table(&[
            ("Life Satisfaction", "FRA", "2010", "7.1"),
            ("Employment Rate", "USA", "2010", "71.0"),
        ]);
        let wide = pivot_wide(&table).expect("pivot");
        assert_eq!(
            wide.columns,
            vec!["country", "year", "life_satisfaction", "employment_rate"]
        );
        // FRA sorts before USA.
        assert_eq!(wide.cell(0, 0), "FRA");
        assert_eq!(wide.cell(0, 2), "7.1");
        assert_eq!(wide.cell(0, 3), "");
        assert_eq!(wide.cell(1, 0), "USA");
        assert_eq!(wide.cell(1, 2), "");
        assert_eq!(wide.cell(1, 3), "71.0");
    }

    #[test]
    fn rows_sorted_by_country_then_numeric_year() {
        let table = long_table(&[
            ("m", "USA", "2011", "1"),
            ("m", "FRA", "2012", "2"),
            ("m", "USA", "2010", "3"),
            ("m", "FRA", "2011", "4"),
        ]);
        let wide = pivot_wide(&table).expect("pivot");
        let keys: Vec<(String, String)> = wide
            .rows
            .iter()
            .map(|row| (row[0].clone(), row[1].clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("FRA".to_string(), "2011".to_string()),
                ("FRA".to_string(), "2012".to_string()),
                ("USA".to_string(), "2010".to_string()),
                ("USA".to_string(), "2011".to_string()),
            ]
        );
    }

    #[test]
    fn variable_columns_follow_first_appearance() {
        let table = long_table(&[
            ("Zebra index", "FRA", "2010", "1"),
            ("Apple index", "FRA", "2010", "2"),
        ]);
        let wide = pivot_wide(&table).expect("pivot");
        assert_eq!(
            wide.columns,
            vec!["country", "year", "zebra_index", "apple_index"]
        );
    }
}
