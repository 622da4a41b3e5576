use serde::{Deserialize, Serialize};

/// An in-memory tabular dataset.
///
/// Every cell is text; numeric fields (years, observation values) are parsed
/// on demand by the stages that need them. After header normalization no two
/// columns share a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Cell contents, or the empty string for a short row.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn column_index_finds_first_occurrence() {
        let table = Table::new(vec!["measure".to_string(), "obs_value".to_string()]);
        assert_eq!(table.column_index("obs_value"), Some(1));
        assert_eq!(table.column_index("missing"), None);
        assert!(table.has_column("measure"));
    }

    #[test]
    fn cell_tolerates_short_rows() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec!["1".to_string()]);
        assert_eq!(table.cell(0, 0), "1");
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(5, 0), "");
    }

    #[test]
    fn table_round_trips_through_json() {
        let mut table = Table::new(vec!["country".to_string(), "year".to_string()]);
        table.push_row(vec!["FRA".to_string(), "2010".to_string()]);
        let json = serde_json::to_string(&table).expect("serialize table");
        let round: Table = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round, table);
    }
}
