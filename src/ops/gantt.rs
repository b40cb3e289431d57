use crate::model::config::GanttConfig;
use crate::model::record::Record;

/// Bar width as a percentage of the cell: `productionOrders × scale`.
/// Only capped at 100 when `clamp` is set; otherwise large order counts
/// produce widths above 100%.
pub fn gantt_percent(record: &Record, config: &GanttConfig) -> u64 {
    let pct = u64::from(record.production_orders) * u64::from(config.scale);
    if config.clamp { pct.min(100) } else { pct }
}

/// Number of filled cells for a bar drawn across `track_width` cells.
/// Overflowing percentages fill the whole track.
pub fn filled_cells(percent: u64, track_width: usize) -> usize {
    let filled = percent.saturating_mul(track_width as u64) / 100;
    filled.min(track_width as u64) as usize
}
