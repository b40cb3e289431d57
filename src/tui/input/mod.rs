mod common;
mod controls;
mod filter;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use common::normalize_key;

/// Handle a key event for the focused control
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;
    app.status_is_error = false;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Table => navigate::handle_navigate(app, key),
        Focus::Filter(_) => filter::handle_filter(app, key),
        Focus::Month => controls::handle_month(app, key),
        Focus::Period => controls::handle_period(app, key),
    }
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::tui::render::test_helpers::sample_app;

    #[test]
    fn ctrl_c_quits_from_any_focus() {
        let mut app = sample_app();
        app.set_focus(Focus::Filter(0));
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_walks_the_focus_ring() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Month);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Table);
    }

    #[test]
    fn any_key_clears_status_message() {
        let mut app = sample_app();
        app.set_error("boom".into());
        handle_key(&mut app, ch('j'));
        assert!(app.status_message.is_none());
        assert!(!app.status_is_error);
    }

    #[test]
    fn typing_into_a_filter_narrows_rows() {
        let mut app = sample_app();
        handle_key(&mut app, ch('/'));
        assert_eq!(app.focus, Focus::Filter(0));
        type_str(&mut app, "product 2");
        assert_eq!(app.visible_rows().len(), 1);
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Table);
        assert_eq!(app.filters.get("product"), Some("product 2"));
    }
}
