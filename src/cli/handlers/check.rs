use crate::io::schedule_io::{self, LoadOptions};
use crate::ops::check::{self, CheckError, CheckResult, CheckWarning};

/// Validate config, columns, and records. Load failures are reported as check
/// errors rather than aborting, and make the command fail.
pub fn cmd_check(load: &LoadOptions, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = match schedule_io::load_schedule(load) {
        Ok(schedule) => check::check_schedule(&schedule),
        Err(e) => {
            tracing::warn!(error = %e, "schedule failed to load");
            CheckResult::load_failed(e.to_string())
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in format_check(&result) {
            println!("{}", line);
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err("schedule has errors".into())
    }
}

fn format_check(result: &CheckResult) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(ref config) = result.config {
        lines.push(format!("config: {}", config));
    }
    if let Some(ref data) = result.data {
        lines.push(format!("data: {}", data));
    }

    if !result.errors.is_empty() {
        lines.push("Errors:".to_string());
        for err in &result.errors {
            match err {
                CheckError::LoadFailed { message } => lines.push(format!("  {}", message)),
            }
        }
    }
    if !result.warnings.is_empty() {
        lines.push("Warnings:".to_string());
        for warn in &result.warnings {
            match warn {
                CheckWarning::NoRecords => lines.push("  no records".to_string()),
                CheckWarning::NoFilterableColumns => {
                    lines.push("  no filterable columns".to_string())
                }
                CheckWarning::GanttOverflow {
                    row,
                    product,
                    percent,
                } => lines.push(format!(
                    "  row {} ({}) gantt bar is {}% (set [gantt] clamp to cap at 100%)",
                    row, product, percent
                )),
            }
        }
    }

    if result.valid {
        lines.push(format!(
            "\u{2713} schedule is valid ({} columns, {} records)",
            result.columns, result.records
        ));
    } else {
        lines.push("\u{2717} schedule has errors".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_result_summary() {
        let result = CheckResult {
            valid: true,
            data: Some("built-in sample".into()),
            columns: 8,
            records: 2,
            ..Default::default()
        };
        assert_eq!(
            format_check(&result),
            vec![
                "data: built-in sample",
                "\u{2713} schedule is valid (8 columns, 2 records)"
            ]
        );
    }

    #[test]
    fn failed_result_lists_errors() {
        let lines = format_check(&CheckResult::load_failed("could not parse mps.toml".into()));
        assert_eq!(
            lines,
            vec!["Errors:", "  could not parse mps.toml", "\u{2717} schedule has errors"]
        );
    }
}
