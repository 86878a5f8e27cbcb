//! Watch command implementation

use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime};

use colored::Colorize;
use quicksort_config::Configuration;
use quicksort_store::{ConfigHandle, ConfigStore};

use crate::error::Result;
use crate::logging::Logging;

/// Run the watch command. Returns only on a startup error.
pub fn run_watch(store: ConfigStore, interval: Duration, logging: &Logging) -> Result<()> {
    let mut watcher = Watcher::open(store)?;
    let config = watcher.handle.current();
    logging.apply(config.log_severity());
    report("Loaded", &watcher, &config);

    loop {
        thread::sleep(interval);
        match watcher.poll() {
            None => {}
            Some(Ok(config)) => {
                logging.apply(config.log_severity());
                report("Reloaded", &watcher, &config);
            }
            Some(Err(e)) => eprintln!(
                "{}: {} (keeping previous configuration)",
                "warning".yellow().bold(),
                e
            ),
        }
    }
}

fn report(action: &str, watcher: &Watcher, config: &Configuration) {
    println!(
        "{} {}: {} chest profile(s), logLevel {}",
        action.green().bold(),
        watcher.handle.store().config_path().display(),
        config.chest_profiles().len(),
        config.log_severity().to_string().cyan()
    );
}

/// Reloads the config file when its modification time changes.
struct Watcher {
    handle: ConfigHandle,
    last_modified: Option<SystemTime>,
}

impl Watcher {
    fn open(store: ConfigStore) -> Result<Self> {
        let handle = ConfigHandle::open(store)?;
        let last_modified = handle.store().modified()?;
        Ok(Self {
            handle,
            last_modified,
        })
    }

    /// `None` when the file is unchanged. A deleted file counts as a change;
    /// the reload recreates it from the defaults.
    fn poll(&mut self) -> Option<quicksort_store::Result<Arc<Configuration>>> {
        let modified = match self.handle.store().modified() {
            Ok(modified) => modified,
            Err(e) => return Some(Err(e)),
        };
        if modified.is_some() && modified == self.last_modified {
            return None;
        }

        let result = self.handle.reload();
        // A failed reload is not retried until the file changes again.
        self.last_modified = self.handle.store().modified().ok().flatten();
        Some(result)
    }
}
