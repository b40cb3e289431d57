use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of production-schedule data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub product: String,
    pub product_family: String,
    pub plant_location: String,
    pub quantity: u32,
    /// ISO-8601 calendar date (`2024-06-01`)
    pub due_date: NaiveDate,
    pub current_stock: u32,
    pub production_orders: u32,
}

/// A field of [`Record`] addressable by its column key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Product,
    ProductFamily,
    PlantLocation,
    Quantity,
    DueDate,
    CurrentStock,
    ProductionOrders,
}

impl RecordField {
    pub const ALL: [RecordField; 7] = [
        RecordField::Product,
        RecordField::ProductFamily,
        RecordField::PlantLocation,
        RecordField::Quantity,
        RecordField::DueDate,
        RecordField::CurrentStock,
        RecordField::ProductionOrders,
    ];

    /// The key used in column definitions and data files
    pub fn key(self) -> &'static str {
        match self {
            RecordField::Product => "product",
            RecordField::ProductFamily => "productFamily",
            RecordField::PlantLocation => "plantLocation",
            RecordField::Quantity => "quantity",
            RecordField::DueDate => "dueDate",
            RecordField::CurrentStock => "currentStock",
            RecordField::ProductionOrders => "productionOrders",
        }
    }

    /// Resolve a column key to a field. Keys are matched exactly.
    pub fn from_key(key: &str) -> Option<RecordField> {
        RecordField::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Whether the field holds a number (right-aligned in tables)
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            RecordField::Quantity | RecordField::CurrentStock | RecordField::ProductionOrders
        )
    }
}

impl Record {
    /// Textual representation of a field, as shown in a cell and as seen by filters
    pub fn field_text(&self, field: RecordField) -> String {
        match field {
            RecordField::Product => self.product.clone(),
            RecordField::ProductFamily => self.product_family.clone(),
            RecordField::PlantLocation => self.plant_location.clone(),
            RecordField::Quantity => self.quantity.to_string(),
            RecordField::DueDate => self.due_date.format("%Y-%m-%d").to_string(),
            RecordField::CurrentStock => self.current_stock.to_string(),
            RecordField::ProductionOrders => self.production_orders.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            product: "Product 1".into(),
            product_family: "Family 1".into(),
            plant_location: "Location 1".into(),
            quantity: 10,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            current_stock: 5,
            production_orders: 2,
        }
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn from_key_is_exact() {
        assert_eq!(RecordField::from_key("Product"), None);
        assert_eq!(RecordField::from_key("product_family"), None);
        assert_eq!(RecordField::from_key("gantt"), None);
    }

    #[test]
    fn field_text_formats_numbers_and_dates() {
        let r = record();
        assert_eq!(r.field_text(RecordField::Product), "Product 1");
        assert_eq!(r.field_text(RecordField::Quantity), "10");
        assert_eq!(r.field_text(RecordField::DueDate), "2024-06-01");
        assert_eq!(r.field_text(RecordField::ProductionOrders), "2");
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "product": "Product 2",
            "productFamily": "Family 2",
            "plantLocation": "Location 2",
            "quantity": 20,
            "dueDate": "2024-07-15",
            "currentStock": 8,
            "productionOrders": 3
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.product_family, "Family 2");
        assert_eq!(r.due_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(r.production_orders, 3);
    }

    #[test]
    fn rejects_negative_quantities() {
        let json = r#"{"product":"P","productFamily":"F","plantLocation":"L",
            "quantity":-1,"dueDate":"2024-07-15","currentStock":0,"productionOrders":0}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
