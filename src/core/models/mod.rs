mod capture_destination;
mod capture_error;
mod capture_settings;
mod capture_state;
mod encoded_image;
mod image_format;
mod pixel_buffer;
mod save_game_config;

pub use capture_destination::CaptureDestination;
pub use capture_error::CaptureError;
pub use capture_settings::CaptureSettings;
pub use capture_state::{CaptureRequests, DestinationState, DestinationStateCell};
pub use encoded_image::{convert, EncodedImage};
pub use image_format::ImageFormat;
pub use pixel_buffer::{required_buffer_length, CapturedFrame, PixelBuffer};
pub use save_game_config::SaveGameConfig;
