//! Reshaping pipelines with explicit stages.
//!
//! The core wide pipeline follows these stages in order:
//! 1. **Load**: read the CSV into an all-text table
//! 2. **Normalize**: canonicalize headers, drop duplicate columns
//! 3. **Validate**: confirm the required semantic fields exist
//! 4. **Filter**: restrict rows to the target year range
//! 5. **Coverage**: keep measures observed in every target year
//! 6. **Pivot**: reshape to one row per country-year
//! 7. **Write**: serialize in (country, year) order
//!
//! Data flows strictly forward; any stage failure aborts the whole run.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use owb_ingest::{InputEncoding, normalize_columns, read_rows, read_table};
use owb_model::variable_id;
use owb_output::{write_rows, write_table};
use owb_transform::{
    REQUIRED_FIELDS, YearRange, clean_long, distinct_values, filter_years, forward_fill_rows,
    pivot_wide, require_fields, select_complete_measures,
};

use crate::types::{CleanRunResult, FillRunResult, InspectRunResult, WideRunResult};

/// Input for the wide-pivot pipeline.
pub struct WideOptions<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub range: YearRange,
}

/// Run the full long-to-wide pipeline: load, normalize, validate, filter,
/// select coverage, pivot, write.
pub fn run_wide_pipeline(options: &WideOptions<'_>) -> Result<WideRunResult> {
    let pipeline_span = info_span!("wide", input = %options.input.display());
    let _pipeline_guard = pipeline_span.enter();
    let pipeline_start = Instant::now();

    let table = info_span!("load").in_scope(|| {
        read_table(options.input, InputEncoding::Utf8)
            .with_context(|| format!("read {}", options.input.display()))
    })?;
    let input_rows = table.height();

    let table = info_span!("normalize").in_scope(|| {
        let table = normalize_columns(table, false);
        require_fields(&table, &REQUIRED_FIELDS).context("validate required columns")?;
        Ok::<_, anyhow::Error>(table)
    })?;

    let table = info_span!("filter")
        .in_scope(|| filter_years(table, options.range).context("filter years"))?;
    let filtered_rows = table.height();

    let (table, selection) = info_span!("coverage")
        .in_scope(|| select_complete_measures(table, options.range).context("select coverage"))?;

    let wide = info_span!("pivot").in_scope(|| pivot_wide(&table).context("pivot wide"))?;

    info_span!("write").in_scope(|| {
        write_table(options.output, &wide)
            .with_context(|| format!("write {}", options.output.display()))
    })?;

    info!(
        input_rows,
        filtered_rows,
        wide_rows = wide.height(),
        variables = selection.selected.len(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "wide pipeline complete"
    );

    let selected = selection
        .selected
        .iter()
        .map(|measure| (measure.clone(), variable_id(measure)))
        .collect();
    Ok(WideRunResult {
        input: options.input.to_path_buf(),
        output: options.output.to_path_buf(),
        input_rows,
        filtered_rows,
        wide_rows: wide.height(),
        selected,
        dropped: selection.dropped,
    })
}

/// Run the long-form cleaning pipeline: load, normalize (folding hyphens),
/// canonicalize the value column, drop metadata columns, write.
pub fn run_clean_pipeline(input: &Path, output: &Path) -> Result<CleanRunResult> {
    let pipeline_span = info_span!("clean", input = %input.display());
    let _pipeline_guard = pipeline_span.enter();
    let pipeline_start = Instant::now();

    let table = read_table(input, InputEncoding::Utf8)
        .with_context(|| format!("read {}", input.display()))?;
    let table = normalize_columns(table, true);
    let clean = clean_long(&table).context("clean long table")?;
    write_table(output, &clean).with_context(|| format!("write {}", output.display()))?;

    info!(
        rows = clean.height(),
        columns = clean.width(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "clean pipeline complete"
    );
    Ok(CleanRunResult {
        output: output.to_path_buf(),
        rows: clean.height(),
        columns: clean.columns,
    })
}

/// Run the forward-fill pipeline: load raw Windows-1252 rows, carry the
/// first two columns forward, write back as UTF-8.
pub fn run_fill_pipeline(input: &Path, output: &Path) -> Result<FillRunResult> {
    let pipeline_span = info_span!("fill", input = %input.display());
    let _pipeline_guard = pipeline_span.enter();
    let pipeline_start = Instant::now();

    let mut rows = read_rows(input, InputEncoding::Latin1)
        .with_context(|| format!("read {}", input.display()))?;
    forward_fill_rows(&mut rows);
    write_rows(output, &rows).with_context(|| format!("write {}", output.display()))?;

    info!(
        rows = rows.len(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "fill pipeline complete"
    );
    Ok(FillRunResult {
        output: output.to_path_buf(),
        rows: rows.len(),
    })
}

/// Enumerate the distinct values of a column.
pub fn run_inspect(input: &Path, column: &str, limit: usize) -> Result<InspectRunResult> {
    let table = read_table(input, InputEncoding::Utf8)
        .with_context(|| format!("read {}", input.display()))?;
    let table = normalize_columns(table, false);
    let mut values =
        distinct_values(&table, column).with_context(|| format!("inspect column {column}"))?;
    let total = values.len();
    values.truncate(limit);
    Ok(InspectRunResult {
        column: column.to_string(),
        values,
        total,
    })
}
