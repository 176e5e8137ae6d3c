use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::models::ImageFormat;

pub trait CapturePathProvider: Send + Sync {
    fn screenshot_directory(&self) -> Result<PathBuf>;
    fn save_directory(&self, game_name: &str) -> Result<PathBuf>;
    fn next_game_preview_path(&self, save_directory: &Path, format: ImageFormat) -> Result<PathBuf>;
}
