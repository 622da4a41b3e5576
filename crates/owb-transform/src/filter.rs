//! Year parsing and the fixed-range row filter.

use tracing::debug;

use owb_model::{ReshapeError, Result, Table};

/// Inclusive range of years retained by the row filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    /// The 2010-2024 window used for the published well-being charts.
    pub const DEFAULT: YearRange = YearRange {
        from: 2010,
        to: 2024,
    };

    pub fn contains(self, year: i32) -> bool {
        year >= self.from && year <= self.to
    }

    pub fn years(self) -> impl Iterator<Item = i32> {
        self.from..=self.to
    }
}

/// Parse a `time_period` cell as an integer year.
///
/// `row` is the zero-based data row index, reported on failure.
pub fn parse_year(value: &str, row: usize) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| ReshapeError::MalformedYear {
            row,
            value: value.to_string(),
        })
}

/// Retain only rows whose year lies inside `range`.
///
/// Pure filter: input order is preserved and nothing is deduplicated. Any
/// unparsable `time_period` is fatal; there is no row-level skip.
pub fn filter_years(table: Table, range: YearRange) -> Result<Table> {
    let year_index =
        table
            .column_index("time_period")
            .ok_or_else(|| ReshapeError::MissingField {
                column: "time_period".to_string(),
            })?;

    let before = table.rows.len();
    let mut rows = Vec::with_capacity(before);
    for (row_index, row) in table.rows.into_iter().enumerate() {
        let raw = row.get(year_index).map_or("", String::as_str);
        let year = parse_year(raw, row_index)?;
        if range.contains(year) {
            rows.push(row);
        }
    }

    debug!(
        before,
        after = rows.len(),
        from = range.from,
        to = range.to,
        "year filter applied"
    );
    Ok(Table {
        columns: table.columns,
        rows,
    })
}
