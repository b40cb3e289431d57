use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Planning horizon shown next to the month selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlanningPeriod {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl PlanningPeriod {
    pub const ALL: [PlanningPeriod; 3] = [
        PlanningPeriod::Monthly,
        PlanningPeriod::Quarterly,
        PlanningPeriod::Yearly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlanningPeriod::Monthly => "Monthly",
            PlanningPeriod::Quarterly => "Quarterly",
            PlanningPeriod::Yearly => "Yearly",
        }
    }

    /// Next option, wrapping around
    pub fn next(self) -> PlanningPeriod {
        match self {
            PlanningPeriod::Monthly => PlanningPeriod::Quarterly,
            PlanningPeriod::Quarterly => PlanningPeriod::Yearly,
            PlanningPeriod::Yearly => PlanningPeriod::Monthly,
        }
    }

    /// Previous option, wrapping around
    pub fn prev(self) -> PlanningPeriod {
        match self {
            PlanningPeriod::Monthly => PlanningPeriod::Yearly,
            PlanningPeriod::Quarterly => PlanningPeriod::Monthly,
            PlanningPeriod::Yearly => PlanningPeriod::Quarterly,
        }
    }
}

impl fmt::Display for PlanningPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planning period: {0} (expected monthly, quarterly or yearly)")]
pub struct ParsePeriodError(String);

impl FromStr for PlanningPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(PlanningPeriod::Monthly),
            "quarterly" => Ok(PlanningPeriod::Quarterly),
            "yearly" => Ok(PlanningPeriod::Yearly),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

/// Month/year and planning-period selection. Only affects the header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFrame {
    /// Any day of the selected month
    pub selected_month: NaiveDate,
    pub planning_period: PlanningPeriod,
}

impl Default for ViewFrame {
    fn default() -> Self {
        ViewFrame::new(Local::now().date_naive(), PlanningPeriod::default())
    }
}

impl ViewFrame {
    pub fn new(selected_month: NaiveDate, planning_period: PlanningPeriod) -> Self {
        ViewFrame {
            selected_month,
            planning_period,
        }
    }

    /// Full month name and 4-digit year, e.g. `June 2024`
    pub fn header_label(&self) -> String {
        self.selected_month.format("%B %Y").to_string()
    }

    /// Move the selection by a number of months. Days past the end of the
    /// target month snap to its last day.
    pub fn shift_months(&mut self, delta: i32) {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.selected_month.checked_add_months(months)
        } else {
            self.selected_month.checked_sub_months(months)
        };
        if let Some(date) = shifted {
            self.selected_month = date;
        }
    }

    pub fn shift_years(&mut self, delta: i32) {
        self.shift_months(delta.saturating_mul(12));
    }

    pub fn cycle_period(&mut self) {
        self.planning_period = self.planning_period.next();
    }

    /// `YYYY-MM` form used by the CLI and config
    pub fn month_key(&self) -> String {
        format!(
            "{:04}-{:02}",
            self.selected_month.year(),
            self.selected_month.month()
        )
    }
}

/// Parse `YYYY-MM` (or a full `YYYY-MM-DD` date) into the first day of that month
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.with_day(1);
    }
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
}
