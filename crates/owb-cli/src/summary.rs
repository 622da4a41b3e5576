//! Human-readable run summaries printed to stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{CleanRunResult, FillRunResult, InspectRunResult, WideRunResult};

pub fn print_wide_summary(result: &WideRunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    println!(
        "Rows: {} read, {} in range, {} country-year rows written",
        result.input_rows, result.filtered_rows, result.wide_rows
    );

    if result.selected.is_empty() {
        println!("No measure has complete coverage for the requested years.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Measure"), header_cell("Column")]);
        apply_table_style(&mut table);
        for (measure, variable) in &result.selected {
            table.add_row(vec![Cell::new(measure), Cell::new(variable)]);
        }
        println!("{table}");
    }
    println!("Measures retained: {}", result.selected.len());
    if !result.dropped.is_empty() {
        println!("Measures dropped (incomplete coverage): {}", result.dropped.len());
    }
}

pub fn print_clean_summary(result: &CleanRunResult) {
    println!("Output: {}", result.output.display());
    println!("Rows: {}", result.rows);
    println!("Resulting columns: {}", result.columns.join(", "));
}

pub fn print_fill_summary(result: &FillRunResult) {
    println!("Output: {}", result.output.display());
    println!("Rows: {}", result.rows);
}

pub fn print_inspect_summary(result: &InspectRunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(&format!(
        "Distinct values of '{}'",
        result.column
    ))]);
    apply_table_style(&mut table);
    for value in &result.values {
        table.add_row(vec![Cell::new(value)]);
    }
    println!("{table}");
    if result.values.len() < result.total {
        println!(
            "Showing {} of {} distinct values.",
            result.values.len(),
            result.total
        );
    } else {
        println!("Count: {}", result.total);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Left);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
