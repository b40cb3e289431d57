mod check;
pub use check::cmd_check;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::schedule_io::{self, LoadOptions};
use crate::model::schedule::Schedule;
use crate::model::view::{PlanningPeriod, parse_month};
use crate::ops::filter::FilterState;
use crate::ops::options;
use crate::ops::table::build_table;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let load = load_options(&cli)?;

    match cli.command {
        None => Err("no subcommand given (run `mps` without arguments for the TUI)".into()),
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(&load, args, json),
            Commands::Columns => cmd_columns(&load, json),
            Commands::Options(args) => cmd_options(&load, args, json),
            Commands::Check => cmd_check(&load, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Translate global flags into schedule load options rooted at the cwd
pub fn load_options(cli: &Cli) -> Result<LoadOptions, std::io::Error> {
    Ok(LoadOptions {
        config: cli.config.clone(),
        data: cli.data.clone(),
        start_dir: Some(std::env::current_dir()?),
    })
}

/// Apply `key=value` arguments in order. Any bad argument aborts.
fn filters_from_args(
    schedule: &Schedule,
    args: &[String],
) -> Result<FilterState, Box<dyn std::error::Error>> {
    let mut filters = FilterState::new();
    for arg in args {
        let (key, value) = parse_filter_arg(arg)
            .ok_or_else(|| format!("invalid filter '{}' (expected KEY=VALUE)", arg))?;
        filters.set_filter(&schedule.registry, key, value)?;
    }
    Ok(filters)
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(load: &LoadOptions, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = schedule_io::load_schedule(load)?;
    let filters = filters_from_args(&schedule, &args.filters)?;

    let mut frame = schedule.frame;
    if let Some(ref month) = args.month {
        frame.selected_month = parse_month(month)
            .ok_or_else(|| format!("invalid month '{}' (expected YYYY-MM)", month))?;
    }
    if let Some(ref period) = args.period {
        frame.planning_period = period.parse::<PlanningPeriod>()?;
    }

    let table = build_table(
        &schedule.records,
        &schedule.registry,
        &filters,
        frame,
        &schedule.config.gantt,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&table_to_json(&table, &filters))?);
    } else {
        for line in format_table(&table) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_columns(load: &LoadOptions, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = schedule_io::load_schedule(load)?;
    let columns = schedule.registry.columns();

    if json {
        let out: Vec<ColumnJson> = columns.iter().map(column_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for col in columns {
            println!("{}", format_column_line(col));
        }
    }
    Ok(())
}

fn cmd_options(
    load: &LoadOptions,
    args: OptionsArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = schedule_io::load_schedule(load)?;
    let column = schedule
        .registry
        .get(&args.column)
        .ok_or_else(|| format!("unknown column: {}", args.column))?;
    let field = column
        .field
        .ok_or_else(|| format!("column has no record field: {}", args.column))?;
    let values = options::distinct_values(&schedule.records, field);

    if json {
        let out = OptionsJson {
            column: args.column,
            values,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(())
}
