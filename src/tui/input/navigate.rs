use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

/// Rows moved by PageUp/PageDown
const PAGE: isize = 10;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX / 2),
        KeyCode::PageDown => app.move_cursor(PAGE),
        KeyCode::PageUp => app.move_cursor(-PAGE),

        // Filters
        KeyCode::Char('/') if !app.filter_keys.is_empty() => app.set_focus(Focus::Filter(0)),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            if idx < app.filter_keys.len() {
                app.set_focus(Focus::Filter(idx));
            }
        }
        KeyCode::Char('x') => {
            app.clear_filters();
            app.set_message("filters cleared".into());
        }

        // View frame
        KeyCode::Char('[') => app.view.shift_months(-1),
        KeyCode::Char(']') => app.view.shift_months(1),
        KeyCode::Char('{') => app.view.shift_years(-1),
        KeyCode::Char('}') => app.view.shift_years(1),
        KeyCode::Char('p') => app.view.planning_period = app.view.planning_period.next(),
        KeyCode::Char('P') => app.view.planning_period = app.view.planning_period.prev(),
        KeyCode::Char('m') => app.set_focus(Focus::Month),

        KeyCode::Char('r') => app.reload_records(),
        _ => {}
    }
}
