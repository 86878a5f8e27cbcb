//! Init and default commands

use colored::Colorize;
use quicksort_config::defaults::DEFAULT_CONFIG_DOCUMENT;
use quicksort_store::ConfigStore;

use crate::error::Result;

/// Run the init command
pub fn run_init(store: &ConfigStore, force: bool) -> Result<()> {
    let path = store.config_path();

    if store.write_default(force)? {
        println!(
            "{} Wrote default configuration to {}",
            "OK".green().bold(),
            path.display()
        );
    } else {
        println!(
            "{} {} already exists (use {} to overwrite)",
            "Skipped".yellow().bold(),
            path.display(),
            "--force".cyan()
        );
    }

    Ok(())
}

/// Run the default command
pub fn run_default() -> Result<()> {
    print!("{DEFAULT_CONFIG_DOCUMENT}");
    Ok(())
}
