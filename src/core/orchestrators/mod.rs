mod frame_capture;
mod game_configuration;

pub use frame_capture::{screenshot_file_name, FrameCapture};
pub use game_configuration::{GameConfiguration, GameConfigurationOutcome};
