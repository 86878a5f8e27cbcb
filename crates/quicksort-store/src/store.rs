//! Locating, bootstrapping, and loading the config file

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use quicksort_config::defaults::{CONFIG_FILENAME, DEFAULT_CONFIG_DOCUMENT, bundled_template};
use quicksort_config::{Configuration, parse};

use crate::{Error, Result, io};

/// Where the user's config lives and how it is loaded.
///
/// The config file is `<config_dir>/quicksort.json5`. Documents are resolved
/// with the first profile of the bundled default document as the template.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the user's config file.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// Write the bundled default document if no config file exists yet.
    ///
    /// Returns `true` when the file was written. An existing file is never
    /// modified.
    pub fn ensure_config_file(&self) -> Result<bool> {
        self.write_default(false)
    }

    /// Write the bundled default document, replacing an existing file only
    /// when `force` is set. Returns whether a write happened.
    pub fn write_default(&self, force: bool) -> Result<bool> {
        let path = self.config_path();
        if path.exists() && !force {
            tracing::debug!(?path, "Config file exists, leaving it alone");
            return Ok(false);
        }

        tracing::info!(?path, "Writing default configuration");
        io::write_atomic(&path, DEFAULT_CONFIG_DOCUMENT.as_bytes())?;
        Ok(true)
    }

    /// Modification time of the config file, `None` when it does not exist.
    pub fn modified(&self) -> Result<Option<SystemTime>> {
        let path = self.config_path();
        match path.metadata().and_then(|m| m.modified()) {
            Ok(time) => Ok(Some(time)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Load and resolve the config file.
    pub fn load(&self) -> Result<Configuration> {
        self.load_from(&self.config_path())
    }

    /// Load and resolve an arbitrary file with the bundled template.
    pub fn load_from(&self, path: &Path) -> Result<Configuration> {
        tracing::info!(?path, "Loading configuration");
        let bytes = io::read_bytes(path)?;
        let template = bundled_template().map_err(|e| Error::config(path, e))?;
        let config =
            parse(&bytes, Some(&template)).map_err(|e| Error::config(path, e))?;
        tracing::debug!(
            profiles = config.chest_profiles().len(),
            log_severity = %config.log_severity(),
            "Configuration resolved"
        );
        Ok(config)
    }
}
