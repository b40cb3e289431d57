use serde::{Deserialize, Serialize};

use super::record::RecordField;

/// When a filter input's value is applied to the filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitPolicy {
    /// Every edit is applied immediately
    #[default]
    Change,
    /// The value is applied when the input loses focus
    Blur,
}

/// A custom cell derivation, resolved from a stable id when the registry is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellRender {
    /// Horizontal bar proportional to `productionOrders`
    Gantt,
}

impl CellRender {
    pub fn id(self) -> &'static str {
        match self {
            CellRender::Gantt => "gantt",
        }
    }

    pub fn from_id(id: &str) -> Option<CellRender> {
        match id {
            "gantt" => Some(CellRender::Gantt),
            _ => None,
        }
    }
}

/// A validated table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Unique among the registry's columns
    pub key: String,
    pub label: String,
    pub filterable: bool,
    pub commit: CommitPolicy,
    /// Record field the key names, if any
    pub field: Option<RecordField>,
    pub render: Option<CellRender>,
}

impl ColumnSpec {
    /// Placeholder shown in an empty filter input
    pub fn filter_placeholder(&self) -> String {
        format!("Search {}", self.label)
    }
}
