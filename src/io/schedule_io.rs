use std::path::PathBuf;

use crate::io::config_io::{self, ConfigError};
use crate::io::data_io::DataError;
use crate::model::config::ScheduleConfig;
use crate::model::schedule::Schedule;
use crate::ops::registry::{ColumnRegistry, RegistryError};

/// Error type for loading a schedule
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid column configuration: {0}")]
    Columns(#[from] RegistryError),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// How to locate the config and records for a session
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config path; otherwise discovered from `start_dir`
    pub config: Option<PathBuf>,
    /// Record file overriding `[schedule] data`
    pub data: Option<PathBuf>,
    /// Directory to start config discovery from
    pub start_dir: Option<PathBuf>,
}

/// Load config, build the column registry, and read the records.
/// Column misconfiguration fails here, before anything is rendered.
pub fn load_schedule(options: &LoadOptions) -> Result<Schedule, ScheduleError> {
    let config_path = match &options.config {
        Some(path) => Some(path.clone()),
        None => options
            .start_dir
            .as_deref()
            .and_then(config_io::discover_config),
    };

    let config = match &config_path {
        Some(path) => config_io::read_config(path)?,
        None => {
            tracing::debug!("no mps.toml found, using defaults");
            ScheduleConfig::default()
        }
    };

    let registry = ColumnRegistry::from_config_or_standard(&config.columns)?;
    let frame = config_io::initial_frame(&config)?;
    let source = config_io::data_source(&config, config_path.as_deref(), options.data.as_deref());
    let records = source.load()?;

    Ok(Schedule {
        config_path,
        config,
        registry,
        source,
        records,
        frame,
    })
}

/// Re-read records after the data file changed on disk
pub fn reload_records(schedule: &mut Schedule) -> Result<usize, DataError> {
    let records = schedule.source.load()?;
    let count = records.len();
    schedule.records = records;
    Ok(count)
}
