//! Process logger setup
//!
//! The subscriber starts at INFO (DEBUG with `--verbose`). Once a config is
//! loaded its `logLevel` is applied through a reload layer, unless verbose
//! output was requested.

use quicksort_config::LogSeverity;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, fmt, reload};

pub struct Logging {
    handle: reload::Handle<LevelFilter, Registry>,
    verbose: bool,
}

impl Logging {
    /// Install the global subscriber. Log output goes to stderr so command
    /// output on stdout stays machine readable.
    pub fn init(verbose: bool) -> Self {
        let initial = if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        let (filter, handle) = reload::Layer::new(initial);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();

        if verbose {
            tracing::debug!("Verbose mode enabled");
        }

        Self { handle, verbose }
    }

    /// Apply the severity from a loaded configuration.
    pub fn apply(&self, severity: LogSeverity) {
        if self.verbose {
            return;
        }
        let level = severity.level_filter();
        match self.handle.reload(level) {
            Ok(()) if severity != LogSeverity::Info => {
                tracing::info!("LogLevel set to {}", severity);
            }
            Ok(()) => {}
            Err(e) => eprintln!("failed to apply logLevel {severity}: {e}"),
        }
    }
}
