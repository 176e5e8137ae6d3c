use crate::core::models::CaptureError;
use crate::global_constants::BYTES_PER_PIXEL;

/// Read-only view of a render target's color data.
///
/// Four bytes per pixel, rows stored bottom-up (origin at the bottom-left
/// corner, as the GPU hands them back).
#[derive(Clone, Copy)]
pub struct PixelBuffer<'a> {
    pub width: u32,
    pub height: u32,
    raw_data: &'a [u8],
    frame_length: usize,
}

impl std::fmt::Debug for PixelBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("raw_data_len", &self.raw_data.len())
            .finish()
    }
}

impl<'a> PixelBuffer<'a> {
    pub fn build_from_raw_data(
        width_pixels: u32,
        height_pixels: u32,
        raw_data: &'a [u8],
    ) -> Result<Self, CaptureError> {
        if width_pixels == 0 || height_pixels == 0 || raw_data.is_empty() {
            return Err(CaptureError::NoDataAvailable);
        }

        let expected = required_buffer_length(width_pixels, height_pixels).ok_or(
            CaptureError::FrameTooLarge {
                width: width_pixels,
                height: height_pixels,
            },
        )?;
        if raw_data.len() < expected {
            return Err(CaptureError::BufferTooSmall {
                width: width_pixels,
                height: height_pixels,
                expected,
                actual: raw_data.len(),
            });
        }

        Ok(Self {
            width: width_pixels,
            height: height_pixels,
            raw_data,
            frame_length: expected,
        })
    }

    pub fn raw_data(&self) -> &'a [u8] {
        self.raw_data
    }

    pub fn copy_to_captured_frame(&self) -> CapturedFrame {
        let frame_length = self.frame_length;

        log::debug!(
            "[PIXEL_BUFFER] copying {}x{} frame ({} bytes)",
            self.width,
            self.height,
            frame_length
        );

        CapturedFrame {
            width: self.width,
            height: self.height,
            raw_data: self.raw_data[..frame_length].to_vec(),
        }
    }
}

/// Owned copy of a frame, detached from the render target so it can cross
/// into the background writer.
#[derive(Clone)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CapturedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CapturedFrame {
    pub fn as_pixel_buffer(&self) -> PixelBuffer<'_> {
        PixelBuffer {
            width: self.width,
            height: self.height,
            raw_data: &self.raw_data,
            frame_length: self.raw_data.len(),
        }
    }
}

/// `None` when the byte count does not fit in `usize`.
pub fn required_buffer_length(width_pixels: u32, height_pixels: u32) -> Option<usize> {
    (width_pixels as usize)
        .checked_mul(height_pixels as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}
