use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::column::CommitPolicy;

/// Configuration from mps.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub schedule: ScheduleInfo,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub gantt: GanttConfig,
    /// Replaces the built-in column list when non-empty
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInfo {
    #[serde(default = "default_title")]
    pub title: String,
    /// JSON record file, relative to the config file's directory
    #[serde(default)]
    pub data: Option<PathBuf>,
}

impl Default for ScheduleInfo {
    fn default() -> Self {
        ScheduleInfo {
            title: default_title(),
            data: None,
        }
    }
}

fn default_title() -> String {
    "Master Production Schedule".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub planning_period: Option<String>,
    /// Initial month as `YYYY-MM`; absent = current month
    #[serde(default)]
    pub month: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttConfig {
    /// Percent of bar width per production order
    #[serde(default = "default_gantt_scale")]
    pub scale: u32,
    /// Cap the bar at 100%. Off by default: large order counts overflow.
    #[serde(default)]
    pub clamp: bool,
}

impl Default for GanttConfig {
    fn default() -> Self {
        GanttConfig {
            scale: default_gantt_scale(),
            clamp: false,
        }
    }
}

fn default_gantt_scale() -> u32 {
    10
}

/// One column entry in `[[columns]]`, validated by the column registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub commit: CommitPolicy,
    /// Renderer id, e.g. `"gantt"`
    #[serde(default)]
    pub render: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub show_key_hints: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: ScheduleConfig = toml::from_str("").unwrap();
        assert_eq!(config.schedule.title, "Master Production Schedule");
        assert!(config.schedule.data.is_none());
        assert_eq!(config.gantt, GanttConfig { scale: 10, clamp: false });
        assert!(config.columns.is_empty());
        assert!(config.view.planning_period.is_none());
    }

    #[test]
    fn parses_columns_and_commit_policy() {
        let text = r#"
[schedule]
title = "Plant A"
data = "orders.json"

[view]
planning_period = "quarterly"
month = "2024-06"

[gantt]
clamp = true

[[columns]]
key = "product"
label = "Product"
filterable = true
commit = "blur"

[[columns]]
key = "gantt"
label = "Gantt Chart"
render = "gantt"
"#;
        let config: ScheduleConfig = toml::from_str(text).unwrap();
        assert_eq!(config.schedule.title, "Plant A");
        assert_eq!(config.schedule.data, Some(PathBuf::from("orders.json")));
        assert_eq!(config.view.planning_period.as_deref(), Some("quarterly"));
        assert!(config.gantt.clamp);
        assert_eq!(config.gantt.scale, 10);
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].commit, CommitPolicy::Blur);
        assert!(!config.columns[1].filterable);
        assert_eq!(config.columns[1].commit, CommitPolicy::Change);
        assert_eq!(config.columns[1].render.as_deref(), Some("gantt"));
    }

    #[test]
    fn unknown_commit_policy_is_a_parse_error() {
        let text = "[[columns]]\nkey = \"product\"\nlabel = \"P\"\ncommit = \"sometimes\"\n";
        assert!(toml::from_str::<ScheduleConfig>(text).is_err());
    }
}
