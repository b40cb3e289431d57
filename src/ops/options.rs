use indexmap::IndexSet;

use crate::model::record::{Record, RecordField};

/// Distinct field values in first-seen order, for dropdown-style filter choices
pub fn distinct_values(records: &[Record], field: RecordField) -> Vec<String> {
    let set: IndexSet<String> = records.iter().map(|r| r.field_text(field)).collect();
    set.into_iter().collect()
}

/// Step through `options` from `current`, as a dropdown does with arrow keys.
///
/// Position 0 is the implicit "All" entry (empty value). `forward` moves down
/// the list, wrapping at both ends. An unrecognized `current` starts from "All".
pub fn cycle_option(options: &[String], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return String::new();
    }
    // Slot 0 = All, slots 1..=n = options
    let slots = options.len() + 1;
    let pos = options
        .iter()
        .position(|o| o == current)
        .map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % slots
    } else {
        (pos + slots - 1) % slots
    };
    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(product: &str, location: &str) -> Record {
        Record {
            product: product.into(),
            product_family: "Family".into(),
            plant_location: location.into(),
            quantity: 1,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            current_stock: 0,
            production_orders: 0,
        }
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let records = vec![
            record("Product 2", "Location 2"),
            record("Product 1", "Location 2"),
            record("Product 2", "Location 1"),
        ];
        assert_eq!(
            distinct_values(&records, RecordField::Product),
            vec!["Product 2", "Product 1"]
        );
        assert_eq!(
            distinct_values(&records, RecordField::PlantLocation),
            vec!["Location 2", "Location 1"]
        );
        assert_eq!(distinct_values(&records, RecordField::Quantity), vec!["1"]);
    }

    #[test]
    fn cycle_option_wraps_through_all() {
        let opts = vec!["A".to_string(), "B".to_string()];
        assert_eq!(cycle_option(&opts, "", true), "A");
        assert_eq!(cycle_option(&opts, "A", true), "B");
        assert_eq!(cycle_option(&opts, "B", true), "");
        assert_eq!(cycle_option(&opts, "", false), "B");
        assert_eq!(cycle_option(&opts, "A", false), "");
    }

    #[test]
    fn cycle_option_from_free_text_starts_at_all() {
        let opts = vec!["A".to_string(), "B".to_string()];
        assert_eq!(cycle_option(&opts, "typed", true), "A");
        assert_eq!(cycle_option(&[], "typed", true), "");
    }
}
