use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::adapters::game_preview_slots::next_game_preview_image_path;
use crate::core::interfaces::ports::CapturePathProvider;
use crate::core::models::{CaptureSettings, ImageFormat};
use crate::global_constants::{
    APPLICATION_DIRECTORY_NAME, ERROR_CONTEXT_DATA_DIR, LOG_TAG_PATHS, SAVES_DIRECTORY_NAME,
    SCREENSHOTS_DIRECTORY_NAME,
};

pub struct FilesystemCapturePaths {
    screenshots_directory: PathBuf,
    saves_directory: PathBuf,
    max_preview_images: usize,
}

impl FilesystemCapturePaths {
    pub fn build(
        screenshots_directory: PathBuf,
        saves_directory: PathBuf,
        max_preview_images: usize,
    ) -> Self {
        log::debug!(
            "{} screenshots in {:?}, saves in {:?}",
            LOG_TAG_PATHS,
            screenshots_directory,
            saves_directory
        );

        Self {
            screenshots_directory,
            saves_directory,
            max_preview_images,
        }
    }

    pub fn build_from_settings(settings: &CaptureSettings) -> Result<Self> {
        let screenshots_directory = match &settings.screenshot_directory {
            Some(directory) => directory.clone(),
            None => Self::default_data_directory()?.join(SCREENSHOTS_DIRECTORY_NAME),
        };
        let saves_directory = match &settings.saves_directory {
            Some(directory) => directory.clone(),
            None => Self::default_data_directory()?.join(SAVES_DIRECTORY_NAME),
        };

        Ok(Self::build(
            screenshots_directory,
            saves_directory,
            settings.max_preview_images,
        ))
    }

    fn default_data_directory() -> Result<PathBuf> {
        Ok(dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!(ERROR_CONTEXT_DATA_DIR))?
            .join(APPLICATION_DIRECTORY_NAME))
    }

    fn sanitize_game_name(game_name: &str) -> String {
        game_name
            .chars()
            .map(|character| match character {
                '/' | '\\' | ':' => '_',
                other => other,
            })
            .collect()
    }
}

impl CapturePathProvider for FilesystemCapturePaths {
    fn screenshot_directory(&self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.screenshots_directory).with_context(|| {
            format!(
                "Unable to create screenshot directory {:?}",
                self.screenshots_directory
            )
        })?;
        Ok(self.screenshots_directory.clone())
    }

    fn save_directory(&self, game_name: &str) -> Result<PathBuf> {
        let directory_name = Self::sanitize_game_name(game_name.trim());
        if directory_name.is_empty() || directory_name == "." || directory_name == ".." {
            anyhow::bail!("Invalid game name for save directory: {:?}", game_name);
        }
        Ok(self.saves_directory.join(directory_name))
    }

    fn next_game_preview_path(
        &self,
        save_directory: &Path,
        format: ImageFormat,
    ) -> Result<PathBuf> {
        next_game_preview_image_path(save_directory, self.max_preview_images, format)
    }
}
