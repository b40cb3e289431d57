use crate::model::column::{CellRender, ColumnSpec};
use crate::model::config::GanttConfig;
use crate::model::record::Record;
use crate::model::view::ViewFrame;

use super::filter::FilterState;
use super::gantt::gantt_percent;
use super::projection::project;
use super::registry::ColumnRegistry;

/// Display value of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    /// Proportional bar; `percent` may exceed 100 when unclamped
    Bar { percent: u64 },
}

impl CellValue {
    /// Plain-text form (bars become `NN%`)
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Bar { percent } => format!("{}%", percent),
        }
    }
}

/// Resolve a column's display value for a record. A renderer takes precedence
/// over the bound field.
pub fn cell_value(record: &Record, column: &ColumnSpec, gantt: &GanttConfig) -> CellValue {
    match (column.render, column.field) {
        (Some(CellRender::Gantt), _) => CellValue::Bar {
            percent: gantt_percent(record, gantt),
        },
        (None, Some(field)) => CellValue::Text(record.field_text(field)),
        (None, None) => CellValue::Text(String::new()),
    }
}

/// A projected record with its resolved cells, one per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub record: &'a Record,
    pub cells: Vec<CellValue>,
}

/// Everything the presentation layer needs for one event turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot<'a> {
    pub columns: &'a [ColumnSpec],
    pub rows: Vec<TableRow<'a>>,
    pub frame: ViewFrame,
    /// Record count before filtering
    pub total: usize,
}

impl TableSnapshot<'_> {
    pub fn header_label(&self) -> String {
        self.frame.header_label()
    }
}

/// Project records through the filters and resolve every visible cell
pub fn build_table<'a>(
    records: &'a [Record],
    registry: &'a ColumnRegistry,
    filters: &FilterState,
    frame: ViewFrame,
    gantt: &GanttConfig,
) -> TableSnapshot<'a> {
    let rows = project(records, registry, filters)
        .into_iter()
        .map(|record| TableRow {
            record,
            cells: registry
                .columns()
                .iter()
                .map(|col| cell_value(record, col, gantt))
                .collect(),
        })
        .collect();

    TableSnapshot {
        columns: registry.columns(),
        rows,
        frame,
        total: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::data_io::sample_records;
    use crate::model::view::PlanningPeriod;
    use chrono::NaiveDate;

    fn frame() -> ViewFrame {
        ViewFrame::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            PlanningPeriod::Monthly,
        )
    }

    #[test]
    fn cells_follow_column_order() {
        let records = sample_records();
        let reg = ColumnRegistry::standard();
        let table = build_table(
            &records,
            &reg,
            &FilterState::new(),
            frame(),
            &GanttConfig::default(),
        );
        assert_eq!(table.total, 2);
        assert_eq!(table.rows.len(), 2);
        let first: Vec<String> = table.rows[0].cells.iter().map(|c| c.display()).collect();
        assert_eq!(
            first,
            vec![
                "Product 1",
                "Family 1",
                "Location 1",
                "10",
                "2024-06-01",
                "5",
                "2",
                "20%",
            ]
        );
        assert_eq!(table.header_label(), "June 2024");
    }

    #[test]
    fn filtered_snapshot_keeps_full_total() {
        let records = sample_records();
        let reg = ColumnRegistry::standard();
        let mut filters = FilterState::new();
        filters.set_filter(&reg, "product", "2").unwrap();
        let table = build_table(&records, &reg, &filters, frame(), &GanttConfig::default());
        assert_eq!(table.total, 2);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].record.product, "Product 2");
        assert_eq!(table.rows[0].cells[7], CellValue::Bar { percent: 30 });
    }

    #[test]
    fn view_frame_does_not_affect_rows() {
        let records = sample_records();
        let reg = ColumnRegistry::standard();
        let filters = FilterState::new();
        let a = build_table(&records, &reg, &filters, frame(), &GanttConfig::default());
        let mut other = frame();
        other.shift_years(3);
        other.cycle_period();
        let b = build_table(&records, &reg, &filters, other, &GanttConfig::default());
        assert_eq!(a.rows, b.rows);
        assert_ne!(a.header_label(), b.header_label());
    }
}
