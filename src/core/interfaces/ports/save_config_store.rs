use std::sync::Arc;

use anyhow::Result;

use crate::core::models::SaveGameConfig;

pub trait SaveConfigStore: Send + Sync {
    fn find_config(&self, config_id: &str) -> Option<SaveGameConfig>;
    fn add_config(&self, config_id: &str, config: SaveGameConfig) -> Result<()>;
    fn save_all_configs(&self) -> Result<()>;
}

/// Optional services a host can expose to the game configuration flow.
pub trait SaveGameCapabilities: Send + Sync {
    fn save_config_store(&self) -> Option<Arc<dyn SaveConfigStore>>;
}
