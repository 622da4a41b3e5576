//! Measure-name sanitization.
//!
//! Wide output uses one column per measure, so measure names have to become
//! code-safe identifiers that downstream charting code can reference.

/// Sanitize a measure name into a stable, code-safe identifier.
///
/// Lower-cases the name, collapses each maximal run of characters outside
/// `[a-z0-9]` into a single underscore, strips leading and trailing
/// underscores, and prefixes `v_` when the result starts with a digit.
/// Deterministic: the same input always yields the same identifier.
///
/// Distinct measures may collide on the same identifier; collisions are not
/// detected here.
pub fn variable_id(measure: &str) -> String {
    let mut id = String::with_capacity(measure.len());
    let mut pending_separator = false;
    for ch in measure.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
            if pending_separator && !id.is_empty() {
                id.push('_');
            }
            pending_separator = false;
            id.push(lower);
        } else {
            pending_separator = true;
        }
    }
    if id.is_empty() {
        // All-symbol names would otherwise produce an empty column name.
        return "unnamed".to_string();
    }
    if id.as_bytes()[0].is_ascii_digit() {
        return format!("v_{id}");
    }
    id
}
