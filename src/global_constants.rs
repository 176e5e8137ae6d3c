#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Frame Grabber";
pub const APPLICATION_DIRECTORY_NAME: &str = "frame-grabber";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_CONVERT: &str = "[CONVERT]";
pub const LOG_TAG_WRITER: &str = "[WRITER]";
pub const LOG_TAG_PATHS: &str = "[PATHS]";
pub const LOG_TAG_TASKS: &str = "[TASKS]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_GAME_CONFIG: &str = "[GAME_CONFIG]";

pub const TASK_NAME_WRITE_SCREENSHOT: &str = "Write screenshot";

pub const MESSAGE_NO_SCREENSHOT_DATA: &str =
    "No screenshot data available. No screenshot will be saved.";
pub const MESSAGE_MISSING_GAME_SESSION: &str =
    "Can't schedule saving game preview image, because can't find an active game";
pub const MESSAGE_SCREENSHOT_SAVED: &str = "Screenshot saved to";
pub const MESSAGE_SCREENSHOT_FAILED: &str = "Failed to save screenshot!";

pub const ERROR_CONTEXT_CREATE_FILE: &str = "Unable to create image file";
pub const ERROR_CONTEXT_ENCODE_IMAGE: &str = "Unable to encode image";
pub const ERROR_CONTEXT_CONFIG_DIR: &str = "Could not find config directory";
pub const ERROR_CONTEXT_DATA_DIR: &str = "Could not find data directory";

pub const DEFAULT_SCREENSHOT_PREFIX: &str = "FrameGrabber";
pub const SCREENSHOT_TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

pub const SCREENSHOTS_DIRECTORY_NAME: &str = "screenshots";
pub const SAVES_DIRECTORY_NAME: &str = "saves";
pub const PREVIEWS_DIRECTORY_NAME: &str = "previews";
pub const DEFAULT_MAX_PREVIEW_IMAGES: usize = 5;

pub const SETTINGS_FILE_NAME: &str = "capture_settings.json";
pub const SAVE_CONFIGS_FILE_NAME: &str = "save_configs.json";

pub const SAVE_CONFIG_ID_PREFIX: &str = "saves:";
pub const SAVE_CONFIG_DESCRIPTION_PREFIX: &str = "Game config: ";

pub const BYTES_PER_PIXEL: usize = 4;
