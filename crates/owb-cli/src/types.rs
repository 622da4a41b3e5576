//! Result types shared between commands and summary printing.

use std::path::PathBuf;

/// Result of the wide-pivot pipeline.
#[derive(Debug)]
pub struct WideRunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Data rows loaded from the input file.
    pub input_rows: usize,
    /// Rows remaining after the year filter.
    pub filtered_rows: usize,
    /// Country-year rows in the wide output.
    pub wide_rows: usize,
    /// Retained measures with their sanitized column identifiers,
    /// in first-seen input order.
    pub selected: Vec<(String, String)>,
    /// Measures discarded for incomplete coverage.
    pub dropped: Vec<String>,
}

/// Result of the long-form cleaning pipeline.
#[derive(Debug)]
pub struct CleanRunResult {
    pub output: PathBuf,
    pub rows: usize,
    /// Columns of the cleaned output, in output order.
    pub columns: Vec<String>,
}

/// Result of the forward-fill pipeline.
#[derive(Debug)]
pub struct FillRunResult {
    pub output: PathBuf,
    /// Rows written, header included.
    pub rows: usize,
}

/// Result of column inspection.
#[derive(Debug)]
pub struct InspectRunResult {
    pub column: String,
    /// Distinct values in first-seen order, truncated to the limit.
    pub values: Vec<String>,
    /// Total number of distinct values before truncation.
    pub total: usize,
}
