use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::model::record::Record;

/// Error type for record loading
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load records from a JSON array file (camelCase keys, ISO dates).
/// File order is the table order.
pub fn load_records(path: &Path) -> Result<Vec<Record>, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let records: Vec<Record> =
        serde_json::from_str(&text).map_err(|e| DataError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
    tracing::info!(path = %path.display(), records = records.len(), "records loaded");
    Ok(records)
}

/// Built-in sample used when no data file is configured
pub fn sample_records() -> Vec<Record> {
    vec![
        Record {
            product: "Product 1".into(),
            product_family: "Family 1".into(),
            plant_location: "Location 1".into(),
            quantity: 10,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default(),
            current_stock: 5,
            production_orders: 2,
        },
        Record {
            product: "Product 2".into(),
            product_family: "Family 2".into(),
            plant_location: "Location 2".into(),
            quantity: 20,
            due_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap_or_default(),
            current_stock: 8,
            production_orders: 3,
        },
    ]
}

/// Where the records for a session come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Sample,
}

impl DataSource {
    pub fn load(&self) -> Result<Vec<Record>, DataError> {
        match self {
            DataSource::File(path) => load_records(path),
            DataSource::Sample => Ok(sample_records()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            DataSource::File(p) => Some(p),
            DataSource::Sample => None,
        }
    }

    /// Short description for status lines
    pub fn describe(&self) -> String {
        match self {
            DataSource::File(p) => p.display().to_string(),
            DataSource::Sample => "built-in sample".to_string(),
        }
    }
}
