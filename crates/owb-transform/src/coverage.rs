//! Coverage selection: keep only measures observed in every target year.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use owb_model::{ReshapeError, Result, Table};

use crate::filter::{YearRange, parse_year};

/// Outcome of the coverage selection stage.
#[derive(Debug, Clone)]
pub struct CoverageSelection {
    /// Measures with complete coverage, in first-seen input order.
    pub selected: Vec<String>,
    /// Measures discarded for incomplete coverage, in first-seen input order.
    pub dropped: Vec<String>,
}

/// Narrow the table to measures whose distinct-year set equals the target
/// range exactly.
///
/// Exact set equality, not subset or superset: a measure missing one target
/// year is dropped. The check runs on the already year-filtered table, so
/// out-of-range years can never disqualify a measure; they were removed by
/// the row filter upstream.
pub fn select_complete_measures(
    table: Table,
    range: YearRange,
) -> Result<(Table, CoverageSelection)> {
    let measure_index = table
        .column_index("measure")
        .ok_or_else(|| ReshapeError::MissingField {
            column: "measure".to_string(),
        })?;
    let year_index = table
        .column_index("time_period")
        .ok_or_else(|| ReshapeError::MissingField {
            column: "time_period".to_string(),
        })?;

    let target: BTreeSet<i32> = range.years().collect();
    let mut first_seen: Vec<String> = Vec::new();
    let mut years_by_measure: BTreeMap<String, BTreeSet<i32>> = BTreeMap::new();

    for (row_index, row) in table.rows.iter().enumerate() {
        let measure = row.get(measure_index).cloned().unwrap_or_default();
        let raw_year = row.get(year_index).map_or("", String::as_str);
        let year = parse_year(raw_year, row_index)?;
        years_by_measure
            .entry(measure.clone())
            .or_insert_with(|| {
                first_seen.push(measure.clone());
                BTreeSet::new()
            })
            .insert(year);
    }

    let mut selected = Vec::new();
    let mut dropped = Vec::new();
    for measure in first_seen {
        if years_by_measure[measure.as_str()] == target {
            selected.push(measure);
        } else {
            dropped.push(measure);
        }
    }

    let keep: BTreeSet<&str> = selected.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .filter(|row| keep.contains(row.get(measure_index).map_or("", String::as_str)))
        .collect();

    debug!(
        selected = selected.len(),
        dropped = dropped.len(),
        rows = rows.len(),
        "coverage selection complete"
    );
    Ok((
        Table {
            columns: table.columns,
            rows,
        },
        CoverageSelection { selected, dropped },
    ))
}

#[cfg(test)]
mod tests {
    use super::select_complete_measures;
    use crate::filter::{YearRange, filter_years};
    use owb_model::Table;

    const RANGE: YearRange = YearRange {
        from: 2010,
        to: 2012,
    };

    fn long_table(rows: &[(&str, &str)]) -> Table {
        let mut table = Table::new(vec!["measure".to_string(), "time_period".to_string()]);
        for (measure, year) in rows {
            table.push_row(vec![(*measure).to_string(), (*year).to_string()]);
        }
        table
    }

    #[test]
    fn keeps_measure_present_every_target_year() {
        let table = long_table(&[("a", "2010"), ("a", "2011"), ("a", "2012")]);
        let (filtered, selection) = select_complete_measures(table, RANGE).expect("select");
        assert_eq!(selection.selected, vec!["a"]);
        assert!(selection.dropped.is_empty());
        assert_eq!(filtered.rows.len(), 3);
    }

    #[test]
    fn drops_measure_missing_one_year() {
        let table = long_table(&[
            ("a", "2010"),
            ("a", "2011"),
            ("a", "2012"),
            ("b", "2010"),
            ("b", "2012"),
        ]);
        let (filtered, selection) = select_complete_measures(table, RANGE).expect("select");
        assert_eq!(selection.selected, vec!["a"]);
        assert_eq!(selection.dropped, vec!["b"]);
        assert_eq!(filtered.rows.len(), 3);
    }

    #[test]
    fn duplicate_years_still_count_as_covered() {
        let table = long_table(&[
            ("a", "2010"),
            ("a", "2010"),
            ("a", "2011"),
            ("a", "2012"),
        ]);
        let (_, selection) = select_complete_measures(table, RANGE).expect("select");
        assert_eq!(selection.selected, vec!["a"]);
    }

    #[test]
    fn extra_year_disqualifies_unless_prefiltered() {
        // Unfiltered: the 2009 observation makes the year set a strict
        // superset of the target, which fails exact equality.
        let raw = long_table(&[("a", "2009"), ("a", "2010"), ("a", "2011"), ("a", "2012")]);
        let (_, selection) = select_complete_measures(raw.clone(), RANGE).expect("select");
        assert!(selection.selected.is_empty());

        // With the row filter applied first, as the pipeline does, the same
        // measure is retained.
        let filtered = filter_years(raw, RANGE).expect("filter");
        let (_, selection) = select_complete_measures(filtered, RANGE).expect("select");
        assert_eq!(selection.selected, vec!["a"]);
    }

    #[test]
    fn reports_measures_in_first_seen_order() {
        let table = long_table(&[
            ("b", "2010"),
            ("a", "2010"),
            ("b", "2011"),
            ("a", "2011"),
            ("b", "2012"),
            ("a", "2012"),
        ]);
        let (_, selection) = select_complete_measures(table, RANGE).expect("select");
        assert_eq!(selection.selected, vec!["b", "a"]);
    }
}
