//! Quicksort CLI
//!
//! Command-line front end for Quicksort chest configuration.

mod cli;
mod commands;
mod error;
mod logging;

use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use quicksort_store::ConfigStore;

use cli::{Cli, Commands};
use error::Result;
use logging::Logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let logging = Logging::init(cli.verbose);
    let store = ConfigStore::new(&cli.config_dir);

    match cli.command {
        Commands::Init { force } => commands::run_init(&store, force),
        Commands::Check { file } => commands::run_check(store, file.as_deref(), &logging),
        Commands::Show { file, json } => {
            commands::run_show(store, file.as_deref(), json, &logging)
        }
        Commands::Classify { tokens } => commands::run_classify(&tokens),
        Commands::Default => commands::run_default(),
        Commands::Watch { interval } => {
            commands::run_watch(store, Duration::from_secs(interval), &logging)
        }
    }
}
