use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::schedule_io::{self, LoadOptions};
use crate::io::watcher::DataWatcher;
use crate::model::column::{ColumnSpec, CommitPolicy};
use crate::model::record::Record;
use crate::model::schedule::Schedule;
use crate::model::view::ViewFrame;
use crate::ops::filter::FilterState;
use crate::ops::options;
use crate::ops::projection::project;
use crate::ops::table::{TableSnapshot, build_table};

use super::input;
use super::render;
use super::theme::Theme;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Row navigation in the table
    Table,
    /// Text input of the nth filterable column
    Filter(usize),
    /// Month/year picker
    Month,
    /// Planning-period selector
    Period,
}

/// Main application state
pub struct App {
    pub schedule: Schedule,
    /// Applied filters; the only input to row projection besides records
    pub filters: FilterState,
    /// Text in each filter input, keyed by column key. Differs from `filters`
    /// while a blur-committed input is being edited.
    pub inputs: HashMap<String, String>,
    pub view: ViewFrame,
    pub focus: Focus,
    pub should_quit: bool,
    pub theme: Theme,
    /// Keys of filterable columns, in display order
    pub filter_keys: Vec<String>,
    /// Cursor row within the projected rows
    pub cursor: usize,
    /// First visible projected row
    pub scroll_offset: usize,
    /// One-shot message for the status row (cleared on next key)
    pub status_message: Option<String>,
    /// Whether the status message is an error
    pub status_is_error: bool,
}

impl App {
    pub fn new(schedule: Schedule) -> Self {
        let filter_keys: Vec<String> = schedule
            .registry
            .filterable()
            .map(|c| c.key.clone())
            .collect();
        let theme = Theme::from_config(&schedule.config.ui);
        let view = schedule.frame;

        App {
            schedule,
            filters: FilterState::new(),
            inputs: HashMap::new(),
            view,
            focus: Focus::Table,
            should_quit: false,
            theme,
            filter_keys,
            cursor: 0,
            scroll_offset: 0,
            status_message: None,
            status_is_error: false,
        }
    }

    /// Projected rows for the current records and applied filters
    pub fn visible_rows(&self) -> Vec<&Record> {
        project(&self.schedule.records, &self.schedule.registry, &self.filters)
    }

    /// Snapshot handed to the renderer
    pub fn table(&self) -> TableSnapshot<'_> {
        build_table(
            &self.schedule.records,
            &self.schedule.registry,
            &self.filters,
            self.view,
            &self.schedule.config.gantt,
        )
    }

    pub fn title(&self) -> &str {
        &self.schedule.config.schedule.title
    }

    /// Column spec behind a filter input index
    pub fn filter_column(&self, idx: usize) -> Option<&ColumnSpec> {
        let key = self.filter_keys.get(idx)?;
        self.schedule.registry.get(key)
    }

    /// Column spec of the focused filter input, if any
    pub fn focused_filter_column(&self) -> Option<&ColumnSpec> {
        match self.focus {
            Focus::Filter(idx) => self.filter_column(idx),
            _ => None,
        }
    }

    /// Current text of a filter input
    pub fn input_value(&self, key: &str) -> &str {
        self.inputs.get(key).map(|s| s.as_str()).unwrap_or("")
    }

    /// True when an input holds text not yet applied to the filter state
    pub fn input_is_pending(&self, key: &str) -> bool {
        let typed = self.input_value(key);
        let applied = self.filters.get(key).unwrap_or("");
        if typed.trim().is_empty() {
            !applied.is_empty()
        } else {
            typed != applied
        }
    }

    /// Edit the focused filter input, then apply it if the column commits on change.
    pub fn edit_focused_input(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(column) = self.focused_filter_column() else {
            return;
        };
        let key = column.key.clone();
        let commit = column.commit;
        edit(self.inputs.entry(key.clone()).or_default());
        if commit == CommitPolicy::Change {
            self.commit_input(&key);
        }
    }

    /// Replace the focused input with the next/previous distinct column value
    pub fn cycle_focused_option(&mut self, forward: bool) {
        let Some(column) = self.focused_filter_column() else {
            return;
        };
        let Some(field) = column.field else {
            return;
        };
        let values = options::distinct_values(&self.schedule.records, field);
        let current = self.input_value(&column.key).to_string();
        let next = options::cycle_option(&values, &current, forward);
        self.edit_focused_input(|s| *s = next);
    }

    /// Apply an input's text to the filter state
    pub fn commit_input(&mut self, key: &str) {
        let value = self.input_value(key).to_string();
        match self
            .filters
            .set_filter(&self.schedule.registry, key, &value)
        {
            Ok(()) => self.clamp_cursor(),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Move focus, committing a blur-policy input that is losing focus
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        if let Some(column) = self.focused_filter_column()
            && column.commit == CommitPolicy::Blur
        {
            let key = column.key.clone();
            self.commit_input(&key);
        }
        self.focus = focus;
    }

    /// Focus order: month, period, each filter, table
    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::Month, Focus::Period];
        ring.extend((0..self.filter_keys.len()).map(Focus::Filter));
        ring.push(Focus::Table);
        ring
    }

    pub fn focus_next(&mut self) {
        let ring = self.focus_ring();
        let pos = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(ring[(pos + 1) % ring.len()]);
    }

    pub fn focus_prev(&mut self) {
        let ring = self.focus_ring();
        let pos = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(ring[(pos + ring.len() - 1) % ring.len()]);
    }

    /// Drop every filter and empty every input
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.inputs.clear();
        self.clamp_cursor();
    }

    /// Keep the cursor inside the projected row range
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_rows().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
        if self.scroll_offset > self.cursor {
            self.scroll_offset = self.cursor;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.visible_rows().len();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, count as isize - 1) as usize;
    }

    /// Re-read records from the data source
    pub fn reload_records(&mut self) {
        match schedule_io::reload_records(&mut self.schedule) {
            Ok(count) => {
                tracing::info!(records = count, "records reloaded");
                self.clamp_cursor();
                self.set_message(format!("reloaded {} records", count));
            }
            Err(e) => {
                tracing::warn!(error = %e, "record reload failed");
                self.set_error(e.to_string());
            }
        }
    }

    pub fn set_message(&mut self, msg: String) {
        self.status_message = Some(msg);
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, msg: String) {
        self.status_message = Some(msg);
        self.status_is_error = true;
    }
}

/// Run the TUI application
pub fn run(options: &LoadOptions) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = schedule_io::load_schedule(options)?;

    // Watch the record file; the sample source has nothing to watch
    let watcher = match schedule.source.path() {
        Some(path) => match DataWatcher::start(path) {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::warn!(error = %e, "file watching unavailable");
                None
            }
        },
        None => None,
    };

    let mut app = App::new(schedule);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&DataWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if watcher.is_some_and(|w| w.poll()) {
            app.reload_records();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
