use std::path::PathBuf;

use crate::io::data_io::DataSource;
use crate::ops::registry::ColumnRegistry;

use super::config::ScheduleConfig;
use super::record::Record;
use super::view::ViewFrame;

/// A loaded production schedule: config, validated columns, and records
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Path to mps.toml, if one was found
    pub config_path: Option<PathBuf>,
    pub config: ScheduleConfig,
    pub registry: ColumnRegistry,
    pub source: DataSource,
    pub records: Vec<Record>,
    /// View frame the session starts with
    pub frame: ViewFrame,
}
