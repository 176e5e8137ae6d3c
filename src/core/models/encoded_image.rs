use image::{imageops, Rgb, RgbImage};

use crate::core::models::{CaptureError, PixelBuffer};
use crate::global_constants::{BYTES_PER_PIXEL, LOG_TAG_CONVERT};

/// Opaque 24-bit RGB image with rows ordered top to bottom.
#[derive(Clone, PartialEq)]
pub struct EncodedImage {
    pixels: RgbImage,
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl EncodedImage {
    /// Flips the bottom-up source rows and drops the alpha channel.
    pub fn convert_from_pixel_buffer(buffer: &PixelBuffer<'_>) -> Self {
        let width = buffer.width;
        let height = buffer.height;
        let raw_data = buffer.raw_data();

        log::debug!("{} converting {}x{} frame", LOG_TAG_CONVERT, width, height);

        let pixels = RgbImage::from_fn(width, height, |x, output_row| {
            let source_row = height - output_row - 1;
            let offset = (x as usize + width as usize * source_row as usize) * BYTES_PER_PIXEL;
            Rgb([raw_data[offset], raw_data[offset + 1], raw_data[offset + 2]])
        });

        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn flipped_vertically(&self) -> Self {
        Self {
            pixels: imageops::flip_vertical(&self.pixels),
        }
    }

    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.pixels
    }
}

pub fn convert(raw_data: &[u8], width: u32, height: u32) -> Result<EncodedImage, CaptureError> {
    let buffer = PixelBuffer::build_from_raw_data(width, height, raw_data)?;
    Ok(EncodedImage::convert_from_pixel_buffer(&buffer))
}
