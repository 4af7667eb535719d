//! Interactive gradebook entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment, start logging.
//! - Load saved data, seed demo rows into empty collections, run the menu.

mod menu;
mod seed;

use clap::Parser;
use gradebook_core::{
    core_version, init_logging, ConfigOverrides, CsvStore, GradebookConfig, Registry,
};
use log::{error, info};
use std::process::ExitCode;

/// Academic record keeper with CSV persistence.
#[derive(Debug, Parser)]
#[command(name = "gradebook", version, about)]
struct Args {
    /// Directory holding students.csv, courses.csv, professors.csv and login.csv.
    #[arg(long)]
    data_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for rotating log files (defaults to <data-dir>/logs).
    #[arg(long)]
    log_dir: Option<String>,

    /// Skip inserting demo records into empty collections.
    #[arg(long)]
    no_seed: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match GradebookConfig::load(ConfigOverrides {
        data_dir: args.data_dir,
        log_level: args.log_level,
        log_dir: args.log_dir,
    }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("gradebook: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Logging is best effort; the menu still works without a log file.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("gradebook: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={} data_dir={}",
        core_version(),
        config.data_dir.display()
    );

    let store = CsvStore::new(&config.data_dir);
    let mut registry = Registry::new();
    if store.data_dir().exists() {
        if let Err(err) = store.load_all(&mut registry) {
            error!("event=cli_start module=cli status=error error={err}");
            eprintln!("gradebook: cannot load data: {err}");
            return ExitCode::FAILURE;
        }
    }
    if !args.no_seed {
        if let Err(err) = seed::seed_demo_data(&mut registry) {
            eprintln!("gradebook: cannot seed demo data: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = menu::Session::new(&mut registry, &store, stdin.lock(), stdout.lock());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("gradebook: {err}");
            ExitCode::FAILURE
        }
    }
}
