use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::column::ColumnSpec;
use crate::ops::gantt::filled_cells;
use crate::ops::projection::filter_regex;
use crate::ops::table::{CellValue, TableSnapshot};
use crate::tui::app::App;
use crate::util::unicode::{Align, display_width, fit_to_width};

use super::push_highlighted_spans;

/// Width of the Gantt bar track in cells (100% fills it)
pub const GANTT_TRACK: usize = 10;
/// Widest a text column may grow before truncation
const MAX_COL_WIDTH: usize = 24;
const COL_GAP: &str = "  ";

/// Rendered width of a cell's content
fn cell_width(cell: &CellValue) -> usize {
    match cell {
        CellValue::Text(s) => display_width(s),
        CellValue::Bar { percent } => GANTT_TRACK + 1 + display_width(&format!("{}%", percent)),
    }
}

/// One width per column: the wider of the label and its widest cell, capped
pub fn column_widths(table: &TableSnapshot) -> Vec<usize> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let widest = table
                .rows
                .iter()
                .map(|row| cell_width(&row.cells[i]))
                .max()
                .unwrap_or(0);
            let floor = if col.render.is_some() { GANTT_TRACK } else { 0 };
            display_width(&col.label)
                .max(widest)
                .max(floor)
                .min(MAX_COL_WIDTH)
        })
        .collect()
}

fn column_align(col: &ColumnSpec) -> Align {
    match col.field {
        Some(field) if field.is_numeric() => Align::Right,
        _ => Align::Left,
    }
}

/// Filled cells, unfilled track, and the trailing percentage label
fn gantt_bar_parts(percent: u64) -> (String, String, String) {
    let filled = filled_cells(percent, GANTT_TRACK);
    (
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(GANTT_TRACK - filled),
        format!(" {}%", percent),
    )
}

/// Bar filled proportionally, then the percentage: `███░░░░░░░ 30%`
#[cfg(test)]
fn gantt_bar_text(percent: u64) -> String {
    let (filled, track, label) = gantt_bar_parts(percent);
    format!("{}{}{}", filled, track, label)
}

fn push_bar_spans(spans: &mut Vec<Span<'static>>, app: &App, percent: u64, width: usize, bg: Color) {
    let (filled, track, label) = gantt_bar_parts(percent);
    let pad = width.saturating_sub(GANTT_TRACK + display_width(&label));
    spans.push(Span::styled(filled, Style::default().fg(app.theme.bar).bg(bg)));
    spans.push(Span::styled(track, Style::default().fg(app.theme.bar_track).bg(bg)));
    spans.push(Span::styled(
        format!("{}{}", label, " ".repeat(pad)),
        Style::default().fg(app.theme.text).bg(bg),
    ));
}

/// Render the month banner, column headers, and projected rows
pub fn render_table_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let body_height = (area.height as usize).saturating_sub(2);

    // Keep the cursor row on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if body_height > 0 && app.cursor >= app.scroll_offset + body_height {
        app.scroll_offset = app.cursor + 1 - body_height;
    }

    let app = &*app;
    let table = app.table();
    let widths = column_widths(&table);
    let mut lines: Vec<Line> = Vec::new();

    // Month banner spanning the table
    lines.push(
        Line::from(Span::styled(
            format!(" {} ", table.header_label()),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.banner)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    // Column headers
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.header)
        .add_modifier(Modifier::BOLD);
    let mut header: Vec<Span> = vec![Span::styled(" ", header_style)];
    for (i, col) in table.columns.iter().enumerate() {
        if i > 0 {
            header.push(Span::styled(COL_GAP, header_style));
        }
        header.push(Span::styled(
            fit_to_width(&col.label.to_uppercase(), widths[i], column_align(col)),
            header_style,
        ));
    }
    lines.push(Line::from(header));

    if table.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            " No matching rows",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    // Highlight regexes for filtered columns, one per column
    let highlights: Vec<_> = table
        .columns
        .iter()
        .map(|col| app.filters.get(&col.key).and_then(filter_regex))
        .collect();
    let match_style_base = Style::default()
        .fg(app.theme.match_fg)
        .bg(app.theme.match_bg);

    for (row_idx, row) in table
        .rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(body_height)
    {
        let is_cursor = row_idx == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let base = Style::default().fg(app.theme.text).bg(row_bg);

        let mut spans: Vec<Span> = vec![Span::styled(" ", base)];
        for (i, (col, cell)) in table.columns.iter().zip(&row.cells).enumerate() {
            if i > 0 {
                spans.push(Span::styled(COL_GAP, base));
            }
            match cell {
                CellValue::Bar { percent } => {
                    push_bar_spans(&mut spans, app, *percent, widths[i], row_bg);
                }
                CellValue::Text(text) => {
                    let fitted = fit_to_width(text, widths[i], column_align(col));
                    push_highlighted_spans(
                        &mut spans,
                        &fitted,
                        base,
                        match_style_base,
                        highlights[i].as_ref(),
                    );
                }
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
