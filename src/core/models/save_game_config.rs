use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::global_constants::{SAVE_CONFIG_DESCRIPTION_PREFIX, SAVE_CONFIG_ID_PREFIX};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SaveGameConfig {
    pub description: String,
    #[serde(default)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

impl SaveGameConfig {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            settings: BTreeMap::new(),
        }
    }

    pub fn for_game_title(game_title: &str) -> Self {
        Self::described(format!("{}{}", SAVE_CONFIG_DESCRIPTION_PREFIX, game_title))
    }

    pub fn config_id_for_game(game_title: &str) -> String {
        format!("{}{}", SAVE_CONFIG_ID_PREFIX, game_title)
    }
}
