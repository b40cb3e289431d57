use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

/// Month picker: left/right step a month, up/down step a year
pub(super) fn handle_month(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => app.view.shift_months(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => app.view.shift_months(1),
        KeyCode::Up | KeyCode::Char('k') => app.view.shift_years(1),
        KeyCode::Down | KeyCode::Char('j') => app.view.shift_years(-1),
        KeyCode::Enter | KeyCode::Esc => app.set_focus(Focus::Table),
        _ => {}
    }
}

/// Period selector: any arrow steps through the periods
pub(super) fn handle_period(app: &mut App, key: KeyEvent) {
    let period = app.view.planning_period;
    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.view.planning_period = period.next()
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.view.planning_period = period.prev()
        }
        KeyCode::Enter | KeyCode::Esc => app.set_focus(Focus::Table),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::model::view::PlanningPeriod;
    use crate::tui::app::Focus;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::sample_app;
    use crossterm::event::KeyCode;

    #[test]
    fn month_picker_steps_months_and_years() {
        let mut app = sample_app();
        handle_key(&mut app, ch('m'));
        assert_eq!(app.focus, Focus::Month);
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.view.header_label(), "May 2024");
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.view.header_label(), "May 2025");
        for _ in 0..8 {
            handle_key(&mut app, press(KeyCode::Right));
        }
        assert_eq!(app.view.header_label(), "January 2026");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Table);
    }

    #[test]
    fn period_selector_wraps() {
        let mut app = sample_app();
        app.set_focus(Focus::Period);
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.view.planning_period, PlanningPeriod::Yearly);
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.view.planning_period, PlanningPeriod::Monthly);
    }

    #[test]
    fn month_change_keeps_rows() {
        let mut app = sample_app();
        app.set_focus(Focus::Month);
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.visible_rows().len(), 2);
        assert!(app.filters.is_empty());
    }
}
