use serde::Serialize;

use crate::model::schedule::Schedule;

use super::gantt::gantt_percent;

/// Structured result from `mps check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub columns: usize,
    pub records: usize,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// Something that keeps the schedule from loading.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Config, column, or record loading failed
    #[serde(rename = "load_failed")]
    LoadFailed { message: String },
}

/// A non-critical issue in a schedule that loads.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// The record source is empty
    #[serde(rename = "no_records")]
    NoRecords,
    /// No column has a filter input
    #[serde(rename = "no_filterable_columns")]
    NoFilterableColumns,
    /// An unclamped Gantt bar runs past 100%
    #[serde(rename = "gantt_overflow")]
    GanttOverflow { row: usize, product: String, percent: u64 },
}

impl CheckResult {
    /// Result for a schedule that failed to load
    pub fn load_failed(message: String) -> Self {
        CheckResult {
            valid: false,
            errors: vec![CheckError::LoadFailed { message }],
            ..Default::default()
        }
    }
}

/// Validate a loaded schedule. Read-only.
pub fn check_schedule(schedule: &Schedule) -> CheckResult {
    let mut warnings = Vec::new();

    if schedule.records.is_empty() {
        warnings.push(CheckWarning::NoRecords);
    }
    if schedule.registry.filterable().next().is_none() {
        warnings.push(CheckWarning::NoFilterableColumns);
    }
    let gantt = &schedule.config.gantt;
    if !gantt.clamp {
        for (row, record) in schedule.records.iter().enumerate() {
            let percent = gantt_percent(record, gantt);
            if percent > 100 {
                warnings.push(CheckWarning::GanttOverflow {
                    row: row + 1,
                    product: record.product.clone(),
                    percent,
                });
            }
        }
    }

    CheckResult {
        valid: true,
        config: schedule
            .config_path
            .as_ref()
            .map(|p| p.display().to_string()),
        data: Some(schedule.source.describe()),
        columns: schedule.registry.len(),
        records: schedule.records.len(),
        errors: Vec::new(),
        warnings,
    }
}
