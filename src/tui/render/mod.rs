pub mod controls;
pub mod filter_bar;
pub mod status_row;
pub mod table_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::App;

/// Main render function, dispatching to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | controls | filters | table | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // month + period
            Constraint::Length(1), // filter inputs
            Constraint::Min(1),    // table
            Constraint::Length(1), // status row
        ])
        .split(area);

    controls::render_title(frame, app, chunks[0]);
    controls::render_controls(frame, app, chunks[1]);
    filter_bar::render_filter_bar(frame, app, chunks[2]);
    table_view::render_table_view(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::projection::filter_regex;
    use super::test_helpers::*;

    #[test]
    fn highlighted_spans_split_on_matches() {
        let mut spans = Vec::new();
        let base = Style::default();
        let hl = Style::default().bg(ratatui::style::Color::Yellow);
        let re = filter_regex("duct");
        push_highlighted_spans(&mut spans, "Product 1", base, hl, re.as_ref());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Pro", "duct", " 1"]);
        assert_eq!(spans[1].style, hl);
    }

    #[test]
    fn full_screen_render_shows_every_region() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("Master Production Schedule"));
        assert!(output.contains("Month: \u{2039} June 2024 \u{203A}"));
        assert!(output.contains("Period: \u{2039} Monthly \u{203A}"));
        assert!(output.contains("Product: Search Product"));
        assert!(output.contains("PRODUCT FAMILY"));
        assert!(output.contains("2 of 2 rows"));
    }
}
