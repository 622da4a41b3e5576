//! Header normalization.
//!
//! SDMX exports carry irregular column naming (mixed case, stray spaces,
//! repeated columns). Normalization brings every header into a canonical
//! identifier form so later stages can address columns by fixed names.

use std::collections::BTreeSet;

use tracing::debug;

use owb_model::Table;

/// Canonical form of a single column header: trimmed, lower-cased, spaces
/// replaced with underscores. The long-form cleaner also folds hyphens.
///
/// Idempotent: normalizing an already-normalized name is a no-op.
pub fn normalize_header(raw: &str, fold_hyphens: bool) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            ' ' => normalized.push('_'),
            '-' if fold_hyphens => normalized.push('_'),
            _ => normalized.extend(ch.to_lowercase()),
        }
    }
    normalized
}

/// Normalize every column header and drop duplicate columns.
///
/// When two original headers normalize to the same name only the left-most
/// column survives; later duplicates are removed entirely, cells included.
pub fn normalize_columns(table: Table, fold_hyphens: bool) -> Table {
    let normalized: Vec<String> = table
        .columns
        .iter()
        .map(|column| normalize_header(column, fold_hyphens))
        .collect();

    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(normalized.len());
    for (index, name) in normalized.iter().enumerate() {
        if seen.insert(name.clone()) {
            kept.push(index);
        } else {
            debug!(column = %name, "dropping duplicate column");
        }
    }

    if kept.len() == normalized.len() {
        return Table {
            columns: normalized,
            rows: table.rows,
        };
    }

    let columns = kept.iter().map(|&index| normalized[index].clone()).collect();
    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            kept.iter()
                .map(|&index| row.get(index).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    Table { columns, rows }
}
