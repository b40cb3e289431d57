use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::model::column::{ColumnSpec, CommitPolicy};
use crate::ops::filter::FilterState;
use crate::ops::table::{CellValue, TableSnapshot};
use crate::util::unicode::{Align, display_width, fit_to_width};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnJson {
    pub key: String,
    pub label: String,
    pub filterable: bool,
    pub commit: CommitPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableJson {
    /// Header label, e.g. `June 2024`
    pub header: String,
    pub month: String,
    pub period: String,
    pub filters: FilterState,
    pub total: usize,
    pub visible: usize,
    pub columns: Vec<String>,
    /// One object per visible row, keyed by column key in column order
    pub rows: Vec<IndexMap<String, Value>>,
}

#[derive(Serialize)]
pub struct OptionsJson {
    pub column: String,
    pub values: Vec<String>,
}

pub fn column_to_json(col: &ColumnSpec) -> ColumnJson {
    ColumnJson {
        key: col.key.clone(),
        label: col.label.clone(),
        filterable: col.filterable,
        commit: col.commit,
        field: col.field.map(|f| f.key()),
        render: col.render.map(|r| r.id()),
    }
}

/// Numbers stay numbers; bars become their percentage
fn cell_to_json(col: &ColumnSpec, cell: &CellValue) -> Value {
    match cell {
        CellValue::Bar { percent } => Value::from(*percent),
        CellValue::Text(text) => {
            let numeric = col.field.is_some_and(|f| f.is_numeric());
            match text.parse::<u64>() {
                Ok(n) if numeric => Value::from(n),
                _ => Value::from(text.as_str()),
            }
        }
    }
}

pub fn table_to_json(table: &TableSnapshot, filters: &FilterState) -> TableJson {
    TableJson {
        header: table.header_label(),
        month: table.frame.month_key(),
        period: table.frame.planning_period.label().to_lowercase(),
        filters: filters.clone(),
        total: table.total,
        visible: table.rows.len(),
        columns: table.columns.iter().map(|c| c.key.clone()).collect(),
        rows: table
            .rows
            .iter()
            .map(|row| {
                table
                    .columns
                    .iter()
                    .zip(&row.cells)
                    .map(|(col, cell)| (col.key.clone(), cell_to_json(col, cell)))
                    .collect()
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

const MAX_COL_WIDTH: usize = 32;

fn align_for(col: &ColumnSpec) -> Align {
    if col.render.is_some() || col.field.is_some_and(|f| f.is_numeric()) {
        Align::Right
    } else {
        Align::Left
    }
}

/// Format the projected table: header label, column labels, one line per row
pub fn format_table(table: &TableSnapshot) -> Vec<String> {
    let texts: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(|c| c.display()).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            texts
                .iter()
                .map(|cells| display_width(&cells[i]))
                .chain(std::iter::once(display_width(&col.label)))
                .max()
                .unwrap_or(0)
                .min(MAX_COL_WIDTH)
        })
        .collect();

    let join = |cells: Vec<String>| cells.join("  ").trim_end().to_string();

    let mut lines = vec![format!(
        "== {} ({}) ==",
        table.header_label(),
        table.frame.planning_period
    )];
    lines.push(join(
        table
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| fit_to_width(&col.label, *w, align_for(col)))
            .collect(),
    ));
    for cells in &texts {
        lines.push(join(
            table
                .columns
                .iter()
                .zip(cells)
                .zip(&widths)
                .map(|((col, text), w)| fit_to_width(text, *w, align_for(col)))
                .collect(),
        ));
    }
    lines.push(format!("{} of {} rows", table.rows.len(), table.total));
    lines
}

/// Format one registry entry for `mps columns`
pub fn format_column_line(col: &ColumnSpec) -> String {
    let mut parts = vec![format!("{:<18} {}", col.key, col.label)];
    if col.filterable {
        let commit = match col.commit {
            CommitPolicy::Change => "change",
            CommitPolicy::Blur => "blur",
        };
        parts.push(format!("[filter: {}]", commit));
    }
    if let Some(render) = col.render {
        parts.push(format!("[render: {}]", render.id()));
    }
    parts.join("  ")
}
