use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Render the centered schedule title
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        app.title().to_string(),
        Style::default()
            .fg(app.theme.header)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Render the month/year picker and the planning-period selector
pub fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let label_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![Span::styled(" Month: ", label_style)];
    spans.push(selector_span(
        app,
        app.view.header_label(),
        app.focus == Focus::Month,
    ));
    spans.push(Span::styled("   Period: ", label_style));
    spans.push(selector_span(
        app,
        app.view.planning_period.label().to_string(),
        app.focus == Focus::Period,
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// `‹ value ›`, highlighted when focused
fn selector_span<'a>(app: &App, value: String, focused: bool) -> Span<'a> {
    let style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_bright).bg(app.theme.background)
    };
    Span::styled(format!("\u{2039} {} \u{203A}", value), style)
}
