use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::ImageFormat;
use crate::global_constants;

fn default_screenshot_prefix() -> String {
    global_constants::DEFAULT_SCREENSHOT_PREFIX.to_string()
}

fn default_max_preview_images() -> usize {
    global_constants::DEFAULT_MAX_PREVIEW_IMAGES
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureSettings {
    #[serde(default)]
    pub screenshot_format: ImageFormat,
    #[serde(default = "default_screenshot_prefix")]
    pub screenshot_prefix: String,
    #[serde(default)]
    pub screenshot_directory: Option<PathBuf>,
    #[serde(default)]
    pub saves_directory: Option<PathBuf>,
    #[serde(default = "default_max_preview_images")]
    pub max_preview_images: usize,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            screenshot_format: ImageFormat::default(),
            screenshot_prefix: default_screenshot_prefix(),
            screenshot_directory: None,
            saves_directory: None,
            max_preview_images: default_max_preview_images(),
        }
    }
}

impl CaptureSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file found at {:?}, using defaults",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let mut settings: CaptureSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", settings_path))?;

        if settings.max_preview_images == 0 {
            log::warn!(
                "{} max_preview_images of 0 is invalid, using {}",
                global_constants::LOG_TAG_SETTINGS,
                global_constants::DEFAULT_MAX_PREVIEW_IMAGES
            );
            settings.max_preview_images = global_constants::DEFAULT_MAX_PREVIEW_IMAGES;
        }

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Screenshot format: {}, prefix: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.screenshot_format,
            settings.screenshot_prefix
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to_path(&settings_path)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!(global_constants::ERROR_CONTEXT_CONFIG_DIR))?
            .join(global_constants::APPLICATION_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
