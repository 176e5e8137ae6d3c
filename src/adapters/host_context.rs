use std::sync::{Arc, RwLock};

use crate::core::interfaces::ports::{GameSessionProvider, SaveConfigStore, SaveGameCapabilities};

/// Active game as seen by the host. Empty while no game is loaded.
#[derive(Default)]
pub struct ActiveGameSession {
    game_name: RwLock<Option<String>>,
}

impl ActiveGameSession {
    pub fn with_game(game_name: impl Into<String>) -> Self {
        Self {
            game_name: RwLock::new(Some(game_name.into())),
        }
    }

    pub fn set_active_game(&self, game_name: Option<String>) {
        match self.game_name.write() {
            Ok(mut current) => *current = game_name,
            Err(poisoned) => *poisoned.into_inner() = game_name,
        }
    }
}

impl GameSessionProvider for ActiveGameSession {
    fn active_game_name(&self) -> Option<String> {
        match self.game_name.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[derive(Default)]
pub struct HostCapabilities {
    save_config_store: Option<Arc<dyn SaveConfigStore>>,
}

impl HostCapabilities {
    pub fn with_save_config_store(store: Arc<dyn SaveConfigStore>) -> Self {
        Self {
            save_config_store: Some(store),
        }
    }
}

impl SaveGameCapabilities for HostCapabilities {
    fn save_config_store(&self) -> Option<Arc<dyn SaveConfigStore>> {
        self.save_config_store.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_has_no_game() {
        let session = ActiveGameSession::default();

        assert!(session.active_game_name().is_none());
    }

    #[test]
    fn test_set_active_game_replaces_name() {
        let session = ActiveGameSession::with_game("First");

        session.set_active_game(Some("Second".to_string()));
        assert_eq!(session.active_game_name().as_deref(), Some("Second"));

        session.set_active_game(None);
        assert!(session.active_game_name().is_none());
    }

    #[test]
    fn test_default_capabilities_offer_no_store() {
        let capabilities = HostCapabilities::default();

        assert!(capabilities.save_config_store().is_none());
    }
}
