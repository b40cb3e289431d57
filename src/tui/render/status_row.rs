use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::display_width;

/// Key hints for the focused control. Table hints are opt-in via
/// `ui.show_key_hints`; input hints always show.
fn key_hint(app: &App) -> Option<&'static str> {
    match app.focus {
        Focus::Table if app.schedule.config.ui.show_key_hints => {
            Some("/ filter  [ ] month  p period  x clear  q quit")
        }
        Focus::Table => None,
        Focus::Filter(_) => Some("\u{2191}\u{2193} options  Tab next  Enter done"),
        Focus::Month => Some("\u{2190}\u{2192} month  \u{2191}\u{2193} year  Enter done"),
        Focus::Period => Some("\u{2190}\u{2192} period  Enter done"),
    }
}

/// Row counts plus the applied filters, e.g. `1 of 2 rows  Product~"2"`
pub fn summary_text(app: &App) -> String {
    let visible = app.visible_rows().len();
    let total = app.schedule.records.len();
    let mut text = format!("{} of {} rows", visible, total);
    for (key, value) in app.filters.filters() {
        let label = app
            .schedule
            .registry
            .get(key)
            .map(|c| c.label.as_str())
            .unwrap_or(key.as_str());
        text.push_str(&format!("  {}~\"{}\"", label, value));
    }
    text
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = match &app.status_message {
        Some(msg) => {
            let fg = if app.status_is_error {
                app.theme.red
            } else {
                app.theme.text_bright
            };
            vec![Span::styled(format!(" {}", msg), Style::default().fg(fg).bg(bg))]
        }
        None => vec![Span::styled(
            format!(" {}", summary_text(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        )],
    };

    if let Some(hint) = key_hint(app) {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint) + 1;
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                format!("{} ", hint),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
