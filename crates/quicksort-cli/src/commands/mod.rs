//! Command implementations for quicksort-cli

pub mod check;
pub mod classify;
pub mod init;
pub mod show;
pub mod watch;

pub use check::run_check;
pub use classify::run_classify;
pub use init::{run_default, run_init};
pub use show::run_show;
pub use watch::run_watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use quicksort_config::Configuration;
use quicksort_store::{ConfigHandle, ConfigStore};

use crate::error::Result;
use crate::logging::Logging;

/// Load either an explicit file or the config directory's file, then apply
/// its logLevel to the process logger.
fn load(
    store: ConfigStore,
    file: Option<&Path>,
    logging: &Logging,
) -> Result<(PathBuf, Arc<Configuration>)> {
    let (path, config) = match file {
        Some(file) => (file.to_path_buf(), Arc::new(store.load_from(file)?)),
        None => {
            let handle = ConfigHandle::open(store)?;
            (handle.store().config_path(), handle.current())
        }
    };
    logging.apply(config.log_severity());
    Ok((path, config))
}
