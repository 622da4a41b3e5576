pub mod clean;
pub mod coverage;
pub mod fill;
pub mod filter;
pub mod inspect;
pub mod pivot;
pub mod validate;

pub use clean::{DROP_COLUMNS, VALUE_CANDIDATES, clean_long};
pub use coverage::{CoverageSelection, select_complete_measures};
pub use fill::forward_fill_rows;
pub use filter::{YearRange, filter_years, parse_year};
pub use inspect::distinct_values;
pub use pivot::pivot_wide;
pub use validate::{REQUIRED_FIELDS, require_fields};
