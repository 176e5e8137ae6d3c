use crate::core::interfaces::ports::RenderTargetProvider;
use crate::core::models::required_buffer_length;

/// Stand-in render target holding a generated gradient frame, bottom row
/// first like a GPU read-back.
pub struct SyntheticRenderTarget {
    width: u32,
    height: u32,
    raw_data: Option<Vec<u8>>,
}

impl SyntheticRenderTarget {
    pub fn build_gradient(width: u32, height: u32) -> Self {
        log::debug!("[RENDER_TARGET] generating {}x{} gradient", width, height);

        let capacity = required_buffer_length(width, height).unwrap_or(0);
        let mut raw_data = Vec::with_capacity(capacity);
        for y in 0..height {
            for x in 0..width {
                raw_data.extend_from_slice(&[
                    Self::scale_to_channel(x, width),
                    Self::scale_to_channel(y, height),
                    128,
                    255,
                ]);
            }
        }

        Self {
            width,
            height,
            raw_data: Some(raw_data),
        }
    }

    pub fn without_data(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            raw_data: None,
        }
    }

    fn scale_to_channel(position: u32, extent: u32) -> u8 {
        if extent <= 1 {
            return 0;
        }
        ((position as u64 * 255) / (extent as u64 - 1)) as u8
    }
}

impl RenderTargetProvider for SyntheticRenderTarget {
    fn color_buffer_raw_data(&self) -> Option<&[u8]> {
        self.raw_data.as_deref()
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
