use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::data_io::{DataSource, sample_records};
use crate::model::column::CommitPolicy;
use crate::model::config::ScheduleConfig;
use crate::model::schedule::Schedule;
use crate::model::view::{PlanningPeriod, ViewFrame};
use crate::ops::registry::{ColumnRegistry, default_columns};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// The two built-in records, standard columns, viewing June 2024 monthly.
pub fn sample_schedule() -> Schedule {
    Schedule {
        config_path: None,
        config: ScheduleConfig::default(),
        registry: ColumnRegistry::standard(),
        source: DataSource::Sample,
        records: sample_records(),
        frame: ViewFrame::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            PlanningPeriod::Monthly,
        ),
    }
}

pub fn sample_app() -> App {
    App::new(sample_schedule())
}

/// Like `sample_app`, with every column using the given commit policy.
pub fn sample_app_with_commit(commit: CommitPolicy) -> App {
    let mut schedule = sample_schedule();
    let configs: Vec<_> = default_columns()
        .into_iter()
        .map(|mut c| {
            c.commit = commit;
            c
        })
        .collect();
    schedule.registry = ColumnRegistry::from_configs(&configs).unwrap();
    App::new(schedule)
}
