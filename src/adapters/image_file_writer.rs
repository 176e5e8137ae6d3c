use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::CaptureImageWriter;
use crate::core::models::{EncodedImage, ImageFormat};
use crate::global_constants::{
    ERROR_CONTEXT_CREATE_FILE, ERROR_CONTEXT_ENCODE_IMAGE, LOG_TAG_WRITER,
};

pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn initialize() -> Self {
        log::debug!("{} initializing image file writer", LOG_TAG_WRITER);
        Self
    }
}

impl CaptureImageWriter for ImageFileWriter {
    fn write_image(&self, image: &EncodedImage, path: &Path, format: ImageFormat) -> Result<()> {
        log::debug!(
            "{} encoding {}x{} {} to {:?}",
            LOG_TAG_WRITER,
            image.width(),
            image.height(),
            format,
            path
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {:?}", parent))?;
        }

        let file = File::create(path)
            .with_context(|| format!("{} {:?}", ERROR_CONTEXT_CREATE_FILE, path))?;
        let mut writer = BufWriter::new(file);

        image
            .as_rgb_image()
            .write_to(&mut writer, format.to_encoder_format())
            .context(ERROR_CONTEXT_ENCODE_IMAGE)?;
        writer.flush()?;

        Ok(())
    }
}
