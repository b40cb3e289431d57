use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};
use crate::util::unicode::pop_grapheme;

/// Keys while a filter input has focus
pub(super) fn handle_filter(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.set_focus(Focus::Table),
        KeyCode::Backspace => app.edit_focused_input(pop_grapheme),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_focused_input(|s| s.clear())
        }
        KeyCode::Down => app.cycle_focused_option(true),
        KeyCode::Up => app.cycle_focused_option(false),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit_focused_input(|s| s.push(c))
        }
        _ => {}
    }
}
