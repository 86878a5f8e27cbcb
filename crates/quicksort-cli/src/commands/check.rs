//! Check command implementation

use std::path::Path;

use colored::Colorize;
use quicksort_store::ConfigStore;

use crate::error::Result;
use crate::logging::Logging;

/// Run the check command
pub fn run_check(store: ConfigStore, file: Option<&Path>, logging: &Logging) -> Result<()> {
    let (path, config) = super::load(store, file, logging)?;

    println!(
        "{} {} is valid: {} chest profile(s), logLevel {}",
        "OK".green().bold(),
        path.display(),
        config.chest_profiles().len(),
        config.log_severity().to_string().cyan()
    );

    Ok(())
}
