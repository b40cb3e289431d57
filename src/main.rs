use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use mps::cli::commands::Cli;
use mps::cli::handlers;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Subcommands log to stderr. The TUI owns the terminal, so it logs only to
/// `--log-file` when one is given.
fn init_logging(level: &str, log_file: Option<&Path>, tui: bool) -> std::io::Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let tui = cli.command.is_none();

    if let Err(e) = init_logging(&cli.log_level, cli.log_file.as_deref(), tui) {
        eprintln!("error: could not open log file: {}", e);
        std::process::exit(1);
    }

    let result: Result<(), Box<dyn std::error::Error>> = if tui {
        match handlers::load_options(&cli) {
            Ok(options) => mps::tui::run(&options),
            Err(e) => Err(e.into()),
        }
    } else {
        handlers::dispatch(cli)
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
