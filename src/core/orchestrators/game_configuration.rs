use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::SaveGameCapabilities;
use crate::core::models::SaveGameConfig;
use crate::global_constants::LOG_TAG_GAME_CONFIG;

#[derive(Debug, Clone, PartialEq)]
pub enum GameConfigurationOutcome {
    Unsupported,
    Existing(SaveGameConfig),
    Created(SaveGameConfig),
}

/// Attaches a per-save configuration to a save game when the host offers a
/// config store.
pub struct GameConfiguration {
    capabilities: Arc<dyn SaveGameCapabilities>,
}

impl GameConfiguration {
    pub fn build(capabilities: Arc<dyn SaveGameCapabilities>) -> Self {
        Self { capabilities }
    }

    pub fn open_for(&self, game_title: &str) -> Result<GameConfigurationOutcome> {
        let Some(store) = self.capabilities.save_config_store() else {
            log::debug!(
                "{} no config store available for '{}'",
                LOG_TAG_GAME_CONFIG,
                game_title
            );
            return Ok(GameConfigurationOutcome::Unsupported);
        };

        let config_id = SaveGameConfig::config_id_for_game(game_title);

        if let Some(existing_config) = store.find_config(&config_id) {
            for (setting_name, setting_value) in &existing_config.settings {
                log::debug!(
                    "{} {}: {}={}",
                    LOG_TAG_GAME_CONFIG,
                    config_id,
                    setting_name,
                    setting_value
                );
            }
            return Ok(GameConfigurationOutcome::Existing(existing_config));
        }

        let new_config = SaveGameConfig::for_game_title(game_title);
        store
            .add_config(&config_id, new_config.clone())
            .with_context(|| format!("Failed to add config {}", config_id))?;
        store
            .save_all_configs()
            .context("Failed to save game configs")?;

        log::info!("{} created config {}", LOG_TAG_GAME_CONFIG, config_id);
        Ok(GameConfigurationOutcome::Created(new_config))
    }
}
