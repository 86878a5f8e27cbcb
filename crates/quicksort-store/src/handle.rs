//! Shared, reloadable configuration snapshot

use std::sync::{Arc, Mutex, RwLock};

use quicksort_config::Configuration;

use crate::{ConfigStore, Result};

/// Holds the current [`Configuration`] and swaps it on reload.
///
/// Readers clone an `Arc` and keep a consistent snapshot for as long as they
/// hold it. Reloads are serialized; a failed reload leaves the previous
/// snapshot in place.
#[derive(Debug)]
pub struct ConfigHandle {
    store: ConfigStore,
    current: RwLock<Arc<Configuration>>,
    reload_lock: Mutex<()>,
}

impl ConfigHandle {
    /// Bootstrap the config file if needed, then load it.
    pub fn open(store: ConfigStore) -> Result<Self> {
        store.ensure_config_file()?;
        let config = store.load()?;
        Ok(Self {
            store,
            current: RwLock::new(Arc::new(config)),
            reload_lock: Mutex::new(()),
        })
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Current snapshot.
    pub fn current(&self) -> Arc<Configuration> {
        let guard = self.current.read().unwrap_or_else(|p| p.into_inner());
        Arc::clone(&*guard)
    }

    /// Re-read the config file and publish the result.
    ///
    /// On failure the error is returned and the previous snapshot stays
    /// current.
    pub fn reload(&self) -> Result<Arc<Configuration>> {
        let _serialized = self.reload_lock.lock().unwrap_or_else(|p| p.into_inner());

        self.store.ensure_config_file()?;
        match self.store.load() {
            Ok(config) => {
                let config = Arc::new(config);
                let mut guard = self.current.write().unwrap_or_else(|p| p.into_inner());
                *guard = Arc::clone(&config);
                tracing::info!(
                    profiles = config.chest_profiles().len(),
                    "Configuration reloaded"
                );
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("Reload failed, keeping previous configuration: {}", e);
                Err(e)
            }
        }
    }
}
