//! ============================================================================
//! Config Module - Host configuration store
//! ============================================================================
//! The core never reads host state on its own; hosts inject a `ConfigStore`
//! and pass values (locale code, favorites) into the core explicitly.
//! Default path: <config_dir>/give-ui/config.json
//! (override via GIVE_UI_CONFIG_PATH env var)
//! ============================================================================

pub mod types;

pub use types::HostConfig;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::types::AllItems;

/// Env var overriding the config file location
pub const CONFIG_PATH_ENV: &str = "GIVE_UI_CONFIG_PATH";

/// Load/persist lifecycle for host configuration
pub trait ConfigStore {
    fn load(&self) -> Result<HostConfig>;
    fn save(&self, config: &HostConfig) -> Result<()>;
}

/// JSON file on disk
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Resolve the store location.
    /// If `path` is None, uses GIVE_UI_CONFIG_PATH or <config_dir>/give-ui/config.json
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let path = if let Some(p) = path {
            p.to_path_buf()
        } else if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
            PathBuf::from(env_path)
        } else {
            let config_dir =
                dirs::config_dir().ok_or_else(|| anyhow!("Cannot determine config directory"))?;
            config_dir.join("give-ui").join("config.json")
        };

        debug!("Using config file at: {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<HostConfig> {
        if !self.path.exists() {
            debug!("No config at {}, using defaults", self.path.display());
            return Ok(HostConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", self.path.display()))
    }

    fn save(&self, config: &HostConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write config {}", self.path.display()))?;

        info!("Saved config to {}", self.path.display());
        Ok(())
    }
}

/// In-process store for tests and embedding hosts
#[derive(Default)]
pub struct MemoryConfigStore {
    config: Mutex<HostConfig>,
}

impl MemoryConfigStore {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<HostConfig> {
        let guard = self
            .config
            .lock()
            .map_err(|_| anyhow!("Config lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, config: &HostConfig) -> Result<()> {
        let mut guard = self
            .config
            .lock()
            .map_err(|_| anyhow!("Config lock poisoned"))?;
        *guard = config.clone();
        Ok(())
    }
}

/// Copy the stored favorite flags onto freshly built items
pub fn apply_favorites(items: &mut AllItems, config: &HostConfig) {
    for item in items.items.values_mut() {
        item.favorite = config.is_favorite(&item.id);
    }
}
