use regex::Regex;

use crate::model::record::{Record, RecordField};

use super::filter::FilterState;
use super::registry::ColumnRegistry;

/// A filter resolved against the registry: the field to read and the
/// compiled matcher. `None` means the value could not be compiled and the
/// filter matches nothing.
struct Predicate {
    field: RecordField,
    matcher: Option<Regex>,
}

fn resolve_predicates(columns: &ColumnRegistry, filters: &FilterState) -> Vec<Predicate> {
    filters
        .filters()
        .iter()
        .filter_map(|(key, value)| {
            let field = columns
                .get(key)
                .filter(|c| c.filterable)
                .and_then(|c| c.field);
            if field.is_none() {
                tracing::debug!(column = key.as_str(), "filter ignored: no filterable field");
            }
            field.map(|field| Predicate {
                field,
                matcher: filter_regex(value),
            })
        })
        .collect()
}

/// Derive the visible rows: every record whose field text contains each active
/// filter value, ignoring case. Record order is preserved. Pure: the same
/// inputs always give the same output.
pub fn project<'r>(
    records: &'r [Record],
    columns: &ColumnRegistry,
    filters: &FilterState,
) -> Vec<&'r Record> {
    let predicates = resolve_predicates(columns, filters);
    let rows: Vec<&Record> = records
        .iter()
        .filter(|record| {
            predicates.iter().all(|p| {
                p.matcher
                    .as_ref()
                    .is_some_and(|re| re.is_match(&record.field_text(p.field)))
            })
        })
        .collect();

    tracing::trace!(
        records = records.len(),
        filters = predicates.len(),
        visible = rows.len(),
        "projection"
    );
    rows
}

/// Case-insensitive literal matcher for a filter value. Projection and match
/// highlighting both use it, so a row is visible exactly when its cell has
/// something to highlight.
pub fn filter_regex(filter_value: &str) -> Option<Regex> {
    if filter_value.is_empty() {
        return None;
    }
    match Regex::new(&format!("(?i){}", regex::escape(filter_value))) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, "filter value could not be compiled");
            None
        }
    }
}
