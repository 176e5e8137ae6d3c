use std::path::Path;

use anyhow::Result;

use crate::core::models::{EncodedImage, ImageFormat};

pub trait CaptureImageWriter: Send + Sync {
    fn write_image(&self, image: &EncodedImage, path: &Path, format: ImageFormat) -> Result<()>;
}
