pub trait GameSessionProvider: Send + Sync {
    fn active_game_name(&self) -> Option<String>;
}
