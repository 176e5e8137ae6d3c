use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};

use crate::core::interfaces::ports::SaveConfigStore;
use crate::core::models::SaveGameConfig;
use crate::global_constants::LOG_TAG_GAME_CONFIG;

/// Save-game configs kept in memory and mirrored to one JSON file on
/// `save_all_configs`.
pub struct JsonSaveConfigStore {
    file_path: PathBuf,
    configs: Mutex<BTreeMap<String, SaveGameConfig>>,
}

impl JsonSaveConfigStore {
    pub fn open(file_path: &Path) -> Result<Self> {
        let configs = if file_path.exists() {
            let contents = std::fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read save configs from {:?}", file_path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse save configs in {:?}", file_path))?
        } else {
            log::info!(
                "{} No save config file at {:?}, starting empty",
                LOG_TAG_GAME_CONFIG,
                file_path
            );
            BTreeMap::new()
        };

        Ok(Self {
            file_path: file_path.to_path_buf(),
            configs: Mutex::new(configs),
        })
    }

    fn lock_configs(&self) -> Result<MutexGuard<'_, BTreeMap<String, SaveGameConfig>>> {
        self.configs
            .lock()
            .map_err(|_| anyhow::anyhow!("Save config lock poisoned"))
    }
}

impl SaveConfigStore for JsonSaveConfigStore {
    fn find_config(&self, config_id: &str) -> Option<SaveGameConfig> {
        self.lock_configs().ok()?.get(config_id).cloned()
    }

    fn add_config(&self, config_id: &str, config: SaveGameConfig) -> Result<()> {
        let mut configs = self.lock_configs()?;
        if configs.contains_key(config_id) {
            anyhow::bail!("Config {} is already registered", config_id);
        }
        configs.insert(config_id.to_string(), config);
        Ok(())
    }

    fn save_all_configs(&self) -> Result<()> {
        let contents = {
            let configs = self.lock_configs()?;
            serde_json::to_string_pretty(&*configs)?
        };

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.file_path, contents)
            .with_context(|| format!("Failed to write save configs to {:?}", self.file_path))?;

        log::info!(
            "{} Saved save configs to {:?}",
            LOG_TAG_GAME_CONFIG,
            self.file_path
        );
        Ok(())
    }
}
