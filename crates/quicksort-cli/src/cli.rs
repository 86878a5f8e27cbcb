//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Quicksort - Check and inspect sorting chest configuration
#[derive(Parser, Debug)]
#[command(name = "quicksort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding quicksort.json5
    #[arg(long, global = true, env = "QUICKSORT_CONFIG_DIR", default_value = "config")]
    pub config_dir: PathBuf,

    /// Enable verbose output (overrides the configured logLevel)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the default quicksort.json5 into the config directory
    ///
    /// An existing file is left untouched unless --force is given.
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Resolve a config file and report whether it is valid
    ///
    /// Without FILE, the config directory's quicksort.json5 is checked
    /// (and created from the defaults if it does not exist yet).
    Check {
        /// Config file to check instead of the config directory's
        file: Option<PathBuf>,
    },

    /// Print the resolved chest profiles
    Show {
        /// Config file to show instead of the config directory's
        file: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show how sorting group tokens are interpreted
    ///
    /// Examples:
    ///   quicksort classify minecraft:stick     # exact item
    ///   quicksort classify 'minecraft:*_wool'  # wildcard
    ///   quicksort classify logs                # item tag
    Classify {
        /// Tokens as they would appear in sortingGroups
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Print the bundled default configuration document
    Default,

    /// Keep the config loaded and reload it whenever the file changes
    ///
    /// A reload that fails keeps the previous configuration. Runs until
    /// interrupted.
    Watch {
        /// Seconds between modification checks
        #[arg(long, default_value_t = 2)]
        interval: u64,
    },
}
