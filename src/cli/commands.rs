use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mps", about = concat!("mps v", env!("CARGO_PKG_VERSION"), " - master production schedule"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: nearest mps.toml above the current directory)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Record file, overriding `schedule.data` from the config
    #[arg(short = 'd', long, global = true)]
    pub data: Option<PathBuf>,

    /// Log filter (error, warn, info, debug, trace, or an EnvFilter directive)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file (the TUI logs nowhere without it)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the filtered schedule table
    List(ListArgs),
    /// List the configured columns
    Columns,
    /// Show the distinct values of a column
    Options(OptionsArgs),
    /// Validate the config and record file
    Check,
}

#[derive(Args)]
pub struct ListArgs {
    /// Column filter, e.g. --filter product=2 (repeatable)
    #[arg(short, long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,
    /// Month shown in the header (YYYY-MM)
    #[arg(long)]
    pub month: Option<String>,
    /// Planning period (monthly, quarterly, yearly)
    #[arg(long)]
    pub period: Option<String>,
}

#[derive(Args)]
pub struct OptionsArgs {
    /// Column key
    pub column: String,
}

/// Split a `key=value` filter argument. The value may itself contain `=`.
pub fn parse_filter_arg(arg: &str) -> Option<(&str, &str)> {
    let (key, value) = arg.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_accepts_repeated_filters() {
        let cli = Cli::try_parse_from([
            "mps", "list", "-f", "product=2", "--filter", "plantLocation=loc", "--month",
            "2024-07",
        ])
        .unwrap();
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.filters, vec!["product=2", "plantLocation=loc"]);
        assert_eq!(args.month.as_deref(), Some("2024-07"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mps", "columns", "--json", "-d", "orders.json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.data, Some(PathBuf::from("orders.json")));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["mps"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn filter_arg_splits_on_first_equals() {
        assert_eq!(parse_filter_arg("product=a=b"), Some(("product", "a=b")));
        assert_eq!(parse_filter_arg("product="), Some(("product", "")));
        assert_eq!(parse_filter_arg("=x"), None);
        assert_eq!(parse_filter_arg("product"), None);
    }
}
