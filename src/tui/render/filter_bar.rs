use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Render one labelled text input per filterable column
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    for idx in 0..app.filter_keys.len() {
        let Some(column) = app.filter_column(idx) else {
            continue;
        };
        if idx > 0 {
            spans.push(Span::styled("  ", Style::default().bg(bg)));
        }
        let focused = app.focus == Focus::Filter(idx);
        let input_bg = if focused { app.theme.selection_bg } else { bg };

        spans.push(Span::styled(
            format!("{}: ", column.label),
            Style::default()
                .fg(app.theme.text)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));

        let value = app.input_value(&column.key);
        if value.is_empty() && !focused {
            spans.push(Span::styled(
                column.filter_placeholder(),
                Style::default().fg(app.theme.dim).bg(input_bg),
            ));
        } else {
            spans.push(Span::styled(
                value.to_string(),
                Style::default().fg(app.theme.text_bright).bg(input_bg),
            ));
        }
        if focused {
            spans.push(Span::styled(
                "\u{258C}", // ▌ cursor
                Style::default().fg(app.theme.highlight).bg(input_bg),
            ));
        }
        // Typed but not yet applied (blur-committed column)
        if app.input_is_pending(&column.key) {
            spans.push(Span::styled(
                "*",
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::CommitPolicy;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn placeholders_when_empty() {
        let app = sample_app();
        let output = render_to_string(120, 1, |frame, area| {
            render_filter_bar(frame, &app, area);
        });
        assert_eq!(
            output.trim(),
            "Product: Search Product  Product Family: Search Product Family  \
             Plant Location: Search Plant Location"
        );
    }

    #[test]
    fn focused_input_shows_value_and_cursor() {
        let mut app = sample_app();
        app.set_focus(Focus::Filter(0));
        app.edit_focused_input(|s| s.push_str("Prod"));
        let output = render_to_string(120, 1, |frame, area| {
            render_filter_bar(frame, &app, area);
        });
        assert!(output.starts_with(" Product: Prod\u{258C}  Product Family:"));
    }

    #[test]
    fn pending_blur_input_is_marked() {
        let mut app = sample_app_with_commit(CommitPolicy::Blur);
        app.set_focus(Focus::Filter(0));
        app.edit_focused_input(|s| s.push('2'));
        let output = render_to_string(120, 1, |frame, area| {
            render_filter_bar(frame, &app, area);
        });
        assert!(output.starts_with(" Product: 2\u{258C}*"));
    }
}
