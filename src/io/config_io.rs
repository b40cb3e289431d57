use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::io::data_io::DataSource;
use crate::model::config::ScheduleConfig;
use crate::model::view::{PlanningPeriod, ViewFrame, parse_month};

/// Name of the config file looked up from the working directory upward
pub const CONFIG_FILE: &str = "mps.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse mps.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),
    #[error("invalid planning period '{0}' (expected monthly, quarterly or yearly)")]
    InvalidPeriod(String),
}

/// Walk up from `start` looking for `mps.toml`.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<ScheduleConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: ScheduleConfig = toml::from_str(&text)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Initial view frame from `[view]`. Missing values default to the current
/// month and `Monthly`; present but malformed values are errors.
pub fn initial_frame(config: &ScheduleConfig) -> Result<ViewFrame, ConfigError> {
    let month = match &config.view.month {
        Some(m) => parse_month(m).ok_or_else(|| ConfigError::InvalidMonth(m.clone()))?,
        None => Local::now().date_naive(),
    };
    let period = match &config.view.planning_period {
        Some(p) => p
            .parse::<PlanningPeriod>()
            .map_err(|_| ConfigError::InvalidPeriod(p.clone()))?,
        None => PlanningPeriod::default(),
    };
    Ok(ViewFrame::new(month, period))
}

/// Resolve where records come from. An explicit override wins; a configured
/// path is relative to the config file's directory; otherwise the sample.
pub fn data_source(
    config: &ScheduleConfig,
    config_path: Option<&Path>,
    data_override: Option<&Path>,
) -> DataSource {
    if let Some(path) = data_override {
        return DataSource::File(path.to_path_buf());
    }
    match &config.schedule.data {
        Some(data) if data.is_absolute() => DataSource::File(data.clone()),
        Some(data) => {
            let base = config_path
                .and_then(|p| p.parent())
                .map(Path::to_path_buf)
                .unwrap_or_default();
            DataSource::File(base.join(data))
        }
        None => DataSource::Sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn discover_walks_up() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "").unwrap();
        assert_eq!(discover_config(&nested), Some(tmp.path().join(CONFIG_FILE)));
    }

    #[test]
    fn read_config_reports_parse_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[schedule\ntitle = 1").unwrap();
        assert!(matches!(read_config(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn initial_frame_from_view_section() {
        let config: ScheduleConfig =
            toml::from_str("[view]\nmonth = \"2024-06\"\nplanning_period = \"Yearly\"\n").unwrap();
        let frame = initial_frame(&config).unwrap();
        assert_eq!(frame.selected_month, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(frame.planning_period, PlanningPeriod::Yearly);
    }

    #[test]
    fn initial_frame_rejects_bad_values() {
        let config: ScheduleConfig = toml::from_str("[view]\nmonth = \"June\"\n").unwrap();
        assert!(matches!(initial_frame(&config), Err(ConfigError::InvalidMonth(_))));
        let config: ScheduleConfig =
            toml::from_str("[view]\nplanning_period = \"weekly\"\n").unwrap();
        assert!(matches!(initial_frame(&config), Err(ConfigError::InvalidPeriod(_))));
    }

    #[test]
    fn data_source_resolution() {
        let config: ScheduleConfig = toml::from_str("[schedule]\ndata = \"orders.json\"\n").unwrap();
        let cfg_path = Path::new("/plant/mps.toml");
        assert_eq!(
            data_source(&config, Some(cfg_path), None),
            DataSource::File(PathBuf::from("/plant/orders.json"))
        );
        assert_eq!(
            data_source(&config, Some(cfg_path), Some(Path::new("/tmp/x.json"))),
            DataSource::File(PathBuf::from("/tmp/x.json"))
        );
        assert_eq!(
            data_source(&ScheduleConfig::default(), None, None),
            DataSource::Sample
        );
    }
}
